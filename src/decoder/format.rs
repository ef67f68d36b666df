/// Format information extraction from a finished symbol
use crate::encoder::format::{FORMAT_INFO_L, format_positions};
use crate::models::{BitMatrix, MaskPattern};

/// BCH(15,5) codewords differ in at least 7 bits, so up to 3 flips are correctable
const MAX_FORMAT_ERRORS: u32 = 3;

/// Format info is 15 bits (5 data + 10 ECC), stored twice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Mask id carried by the format word
    pub mask_pattern: MaskPattern,
    /// Bit errors corrected in the copy that was used
    pub errors: u32,
}

impl FormatInfo {
    /// Read both copies and keep the one closest to a valid level-L word
    pub fn extract(matrix: &BitMatrix) -> Option<Self> {
        format_positions(matrix.size())
            .iter()
            .filter_map(|copy| Self::decode(Self::read_word(matrix, copy)))
            .min_by_key(|info| info.errors)
    }

    fn read_word(matrix: &BitMatrix, positions: &[(usize, usize); 15]) -> u16 {
        positions
            .iter()
            .enumerate()
            .fold(0u16, |word, (i, &(row, col))| {
                word | ((matrix.get(row, col) as u16) << i)
            })
    }

    /// Nearest table entry within the correctable distance
    pub fn decode(word: u16) -> Option<Self> {
        FORMAT_INFO_L
            .iter()
            .enumerate()
            .map(|(id, &valid)| (id, (valid ^ word).count_ones()))
            .min_by_key(|&(_, distance)| distance)
            .filter(|&(_, distance)| distance <= MAX_FORMAT_ERRORS)
            .and_then(|(id, errors)| {
                MaskPattern::from_bits(id as u8).map(|mask_pattern| Self {
                    mask_pattern,
                    errors,
                })
            })
    }
}
