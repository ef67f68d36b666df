//! Symbol reading modules
//!
//! Reads a finished module matrix back to its payload:
//! - Format information extraction (mask pattern)
//! - Unmasking and codeword extraction
//! - Reed-Solomon error correction per block
//! - Byte-mode segment parsing

/// Codeword extraction with on-the-fly unmasking
pub mod bitstream;
/// Format information extraction (mask pattern, level L only)
pub mod format;
/// Deinterleaving, block correction and segment parsing
pub mod payload;
/// Reed-Solomon error correction
pub mod reed_solomon;

use crate::encoder::function_patterns::function_layout;
use crate::encoder::tables::version_spec;
use crate::models::{BitMatrix, MaskPattern, QRCode, Version};
use format::FormatInfo;
use thiserror::Error;

/// Errors that can occur while reading a symbol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Side length is not 17 + 4v for v in 1..=10
    #[error("matrix size {0} is not a version 1-10 symbol")]
    UnsupportedSize(usize),
    /// Neither format copy is within three bits of a level-L word
    #[error("no valid level-L format information")]
    FormatInfo,
    /// A block had more than `ec / 2` codeword errors
    #[error("block {block} has more errors than its EC codewords can correct")]
    Uncorrectable {
        /// Index of the failing block, in interleave order
        block: usize,
    },
    /// Segment mode other than byte mode
    #[error("unsupported segment mode {0:#06b}")]
    UnsupportedMode(u8),
    /// Count indicator promises more bytes than the codewords carry
    #[error("data codewords end before the segment does")]
    Truncated,
    /// Bytes decoded but `text()` was asked for and they are not UTF-8
    #[error("payload is not valid UTF-8")]
    InvalidUtf8,
}

/// Result of reading a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// Version implied by the side length
    pub version: Version,
    /// Mask named by the format information
    pub mask_pattern: MaskPattern,
    /// Raw payload
    pub bytes: Vec<u8>,
    /// Codewords repaired by error correction
    pub corrected: usize,
}

impl DecodedSymbol {
    /// Payload as UTF-8 text
    pub fn text(&self) -> Result<&str, DecodeError> {
        std::str::from_utf8(&self.bytes).map_err(|_| DecodeError::InvalidUtf8)
    }
}

/// Read an encoded symbol back to its payload
pub fn read(code: &QRCode) -> Result<DecodedSymbol, DecodeError> {
    read_matrix(code.modules())
}

/// Read a bare module matrix (no quiet zone)
pub fn read_matrix(matrix: &BitMatrix) -> Result<DecodedSymbol, DecodeError> {
    let version =
        Version::from_size(matrix.size()).ok_or(DecodeError::UnsupportedSize(matrix.size()))?;
    let format = FormatInfo::extract(matrix).ok_or(DecodeError::FormatInfo)?;
    tracing::debug!(
        version = version.number(),
        mask = format.mask_pattern.id(),
        format_errors = format.errors,
        "read format information"
    );

    let layout = function_layout(version);
    let total = version_spec(version).total_codewords();
    let codewords =
        bitstream::extract_codewords(matrix, &layout, format.mask_pattern, total);
    let (data, corrected) = payload::deinterleave_and_correct(&codewords, version)?;
    let bytes = payload::decode_payload(&data, version)?;
    tracing::debug!(bytes = bytes.len(), corrected, "decoded payload");

    Ok(DecodedSymbol {
        version,
        mask_pattern: format.mask_pattern,
        bytes,
        corrected,
    })
}
