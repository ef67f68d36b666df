/// Symbol version selection from payload length
use crate::encoder::EncodeError;
use crate::encoder::tables::total_data_codewords;
use crate::models::Version;

const MODE_INDICATOR_BITS: usize = 4;
const TERMINATOR_BITS: usize = 4;

fn overhead_bits(version: Version) -> usize {
    MODE_INDICATOR_BITS + version.char_count_bits()
}

fn available_bits(version: Version) -> usize {
    total_data_codewords(version) * 8
}

/// Pick the smallest version whose level-L byte-mode capacity holds `len` bytes.
///
/// A version that fits the payload plus a full terminator wins; failing that,
/// the first version that fits with the terminator dropped.
pub fn select_version(len: usize) -> Result<Version, EncodeError> {
    let payload_bits = len.saturating_mul(8);
    let fits = |version: Version, extra: usize| {
        overhead_bits(version)
            .saturating_add(payload_bits)
            .saturating_add(extra)
            <= available_bits(version)
    };

    Version::all()
        .find(|&v| fits(v, TERMINATOR_BITS))
        .or_else(|| Version::all().find(|&v| fits(v, 0)))
        .ok_or(EncodeError::CapacityExceeded {
            len,
            max: max_payload_bytes(),
        })
}

/// Largest byte payload a version can carry
pub fn byte_capacity(version: Version) -> usize {
    (available_bits(version) - overhead_bits(version)) / 8
}

/// Largest byte payload any supported version can carry
pub fn max_payload_bytes() -> usize {
    byte_capacity(Version::MAX)
}
