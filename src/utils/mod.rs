//! Utility modules (field arithmetic, text encoding)

/// GF(256) arithmetic tables
pub mod gf256;
/// UTF-8 encoding of payload text
pub mod utf8;
