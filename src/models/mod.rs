/// Square module grid
pub mod matrix;
/// Version, mask pattern and finished symbol
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{MaskPattern, QRCode, Version};
