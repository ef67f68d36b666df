//! QR code encoding modules
//!
//! Turns a payload into a finished symbol:
//! - Version selection and byte-mode data codewords
//! - Reed-Solomon error correction and block interleaving
//! - Function patterns and zigzag data placement
//! - Mask trials and penalty scoring

use thiserror::Error;

/// Byte-mode data codeword construction
pub mod bitstream;
/// Format information words and positions
pub mod format;
/// Finder, alignment, timing and version-info layout
pub mod function_patterns;
/// Role-tracking module grid
pub mod grid;
/// Block splitting and interleaving
pub mod interleave;
/// Mask application and selection
pub mod mask;
/// Mask penalty rules
pub mod penalty;
/// Zigzag placement of message bits
pub mod placement;
/// Reed-Solomon EC codeword generation
pub mod reed_solomon;
/// Per-version block and alignment tables (level L)
pub mod tables;
/// Version selection
pub mod version;

use crate::models::{MaskPattern, QRCode, Version};
use crate::utils::utf8;
use mask::{MaskStrategy, MaskTrial};
use penalty::Penalty;

/// Errors that can occur while encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Payload longer than version 10 holds at level L
    #[error("input too long for supported QR capacity ({len} bytes, max {max})")]
    CapacityExceeded {
        /// Payload length in bytes
        len: usize,
        /// Largest payload any supported version holds
        max: usize,
    },
}

/// Everything the mask search saw for one payload
#[derive(Debug, Clone)]
pub struct EncodeReport {
    /// The symbol built with the winning mask
    pub code: QRCode,
    /// Penalty per mask id
    pub penalties: [Penalty; 8],
}

/// Encoder with an explicit mask-search strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    strategy: MaskStrategy,
}

impl Encoder {
    /// Encoder using the configured mask strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder that always runs mask trials with `strategy`
    pub fn with_strategy(strategy: MaskStrategy) -> Self {
        Self { strategy }
    }

    /// Encode text as UTF-8 in byte mode
    pub fn encode(&self, text: &str) -> Result<QRCode, EncodeError> {
        self.encode_bytes(&utf8::encode_str(text))
    }

    /// Encode UTF-16 code units (unpaired surrogates are kept, see `utils::utf8`)
    pub fn encode_utf16(&self, units: &[u16]) -> Result<QRCode, EncodeError> {
        self.encode_bytes(&utf8::encode_utf16(units))
    }

    /// Encode raw bytes in byte mode
    pub fn encode_bytes(&self, payload: &[u8]) -> Result<QRCode, EncodeError> {
        let (version, base) = Self::build_base(payload)?;
        let best = mask::select_mask(&base, self.strategy);
        Ok(Self::finish(version, best))
    }

    /// Encode and keep the penalty of every mask trial
    pub fn encode_with_report(&self, payload: &[u8]) -> Result<EncodeReport, EncodeError> {
        let (version, base) = Self::build_base(payload)?;
        let trials = mask::evaluate_masks(&base, self.strategy);
        let mut penalties = [Penalty::default(); 8];
        for trial in &trials {
            penalties[trial.mask.id() as usize] = trial.penalty;
        }
        let best = mask::best_trial(trials)
            .unwrap_or_else(|| mask::run_trial(&base, MaskPattern::Pattern0));
        Ok(EncodeReport {
            code: Self::finish(version, best),
            penalties,
        })
    }

    /// Version choice, data + EC codewords and the unmasked base grid
    fn build_base(payload: &[u8]) -> Result<(Version, grid::ModuleGrid), EncodeError> {
        let version = version::select_version(payload.len())?;
        tracing::debug!(
            bytes = payload.len(),
            version = version.number(),
            size = version.size(),
            "selected version"
        );

        let data = bitstream::encode_data(payload, version);
        let message = interleave::interleave(&data, version);

        let mut base = function_patterns::function_layout(version);
        placement::place_message(&mut base, &message);
        Ok((version, base))
    }

    fn finish(version: Version, best: MaskTrial) -> QRCode {
        tracing::debug!(
            mask = best.mask.id(),
            penalty = best.penalty.total(),
            "selected mask"
        );
        QRCode::new(version, best.mask, best.modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::format::{format_positions, format_word};

    #[test]
    fn test_hello_is_version_one() {
        let code = Encoder::with_strategy(MaskStrategy::Sequential)
            .encode("HELLO")
            .unwrap();
        assert_eq!(code.version().number(), 1);
        assert_eq!(code.size(), 21);

        let word = format_word(code.mask_pattern());
        for copy in format_positions(21) {
            for (i, (row, col)) in copy.into_iter().enumerate() {
                assert_eq!(code.is_dark(row, col), (word >> i) & 1 == 1);
            }
        }
        assert!(code.is_dark(13, 8));
    }

    #[test]
    fn test_capacity_error_message() {
        let err = Encoder::new().encode(&"x".repeat(300)).unwrap_err();
        assert_eq!(err, EncodeError::CapacityExceeded { len: 300, max: 271 });
        assert!(err.to_string().contains("input too long"));
    }

    #[test]
    fn test_report_matches_plain_encode() {
        let encoder = Encoder::with_strategy(MaskStrategy::Sequential);
        let report = encoder.encode_with_report(b"report me").unwrap();
        let code = encoder.encode_bytes(b"report me").unwrap();
        assert_eq!(report.code, code);
        let chosen = report.penalties[code.mask_pattern().id() as usize].total();
        assert!(report.penalties.iter().all(|p| chosen <= p.total()));
    }

    #[test]
    fn test_utf16_and_str_agree() {
        let encoder = Encoder::with_strategy(MaskStrategy::Sequential);
        let text = "snow ☃ and 😀";
        let units: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(encoder.encode(text).unwrap(), encoder.encode_utf16(&units).unwrap());
    }
}
