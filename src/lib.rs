//! RustQR encoder - QR code symbol generation in pure Rust
//!
//! Encodes text or bytes into a QR code symbol (byte mode, error correction
//! level L, versions 1-10), picks the mask with the lowest penalty, and can
//! render the result or read it back.
//!
//! ```
//! let code = rust_qr_gen::encode("HELLO").unwrap();
//! assert_eq!(code.size(), 21);
//! let decoded = rust_qr_gen::read(&code).unwrap();
//! assert_eq!(decoded.text().unwrap(), "HELLO");
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults (mask strategy, render scale, debug switch)
pub mod config;
/// Symbol reading (format extraction, unmasking, error correction)
pub mod decoder;
/// Symbol construction (codewords, layout, placement, masking)
pub mod encoder;
/// Core data structures (QRCode, BitMatrix, Version, MaskPattern)
pub mod models;
/// PNG-ready and terminal renderings
pub mod render;
/// Utility functions (GF(256) arithmetic, UTF-8 conversion)
pub mod utils;

pub use decoder::{DecodeError, DecodedSymbol};
pub use encoder::mask::MaskStrategy;
pub use encoder::{EncodeError, EncodeReport, Encoder};
pub use models::{BitMatrix, MaskPattern, QRCode, Version};
pub use render::{RenderError, RenderOptions, parse_hex_color, render_text};

use image::RgbImage;

/// Encode text (as UTF-8, byte mode) into the smallest fitting symbol
///
/// # Errors
/// `EncodeError::CapacityExceeded` when the UTF-8 form is longer than 271 bytes
pub fn encode(text: &str) -> Result<QRCode, EncodeError> {
    Encoder::new().encode(text)
}

/// Encode raw bytes into the smallest fitting symbol
pub fn encode_bytes(payload: &[u8]) -> Result<QRCode, EncodeError> {
    Encoder::new().encode_bytes(payload)
}

/// Encode UTF-16 code units; unpaired surrogates are kept rather than replaced
pub fn encode_utf16(units: &[u16]) -> Result<QRCode, EncodeError> {
    Encoder::new().encode_utf16(units)
}

/// Read a symbol back to its payload, correcting damaged codewords
pub fn read(code: &QRCode) -> Result<DecodedSymbol, DecodeError> {
    decoder::read(code)
}

/// Rasterize a symbol with a quiet zone
pub fn render(code: &QRCode, options: &RenderOptions) -> RgbImage {
    render::render(code, options)
}
