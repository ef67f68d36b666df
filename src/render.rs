//! Raster and terminal renderings of a finished symbol

use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::config;
use crate::models::{QRCode, Version};

/// Largest image side accepted, in pixels
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Errors that can occur while configuring a rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Scale of zero pixels per module
    #[error("scale must be at least one pixel per module")]
    ZeroScale,
    /// Largest symbol would exceed `MAX_IMAGE_SIDE`
    #[error("image side of {side} pixels exceeds the 16384 pixel limit")]
    TooLarge {
        /// Image side the options would produce for version 10
        side: u64,
    },
    /// Color string that is not `#rrggbb`, `rrggbb` or `#rgb`
    #[error("invalid color {0:?}, expected #rrggbb or #rgb")]
    InvalidColor(String),
}

/// Validated raster options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    scale: u32,
    quiet_zone: u32,
    foreground: Rgb<u8>,
    background: Rgb<u8>,
}

impl RenderOptions {
    /// Checked against the largest symbol, so any `QRCode` renders
    pub fn new(
        scale: u32,
        quiet_zone: u32,
        foreground: Rgb<u8>,
        background: Rgb<u8>,
    ) -> Result<Self, RenderError> {
        if scale == 0 {
            return Err(RenderError::ZeroScale);
        }
        let side = side_pixels(Version::MAX.size(), quiet_zone, scale);
        if side > MAX_IMAGE_SIDE as u64 {
            return Err(RenderError::TooLarge { side });
        }
        Ok(Self {
            scale,
            quiet_zone,
            foreground,
            background,
        })
    }

    /// Pixels per module
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Border width in modules
    pub fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }

    /// Dark module color
    pub fn foreground(&self) -> Rgb<u8> {
        self.foreground
    }

    /// Light modules and the quiet zone
    pub fn background(&self) -> Rgb<u8> {
        self.background
    }
}

impl Default for RenderOptions {
    /// Black on white, standard quiet zone, `QR_RENDER_SCALE` pixels per module
    fn default() -> Self {
        Self {
            scale: config::render_scale(),
            quiet_zone: config::QUIET_ZONE_MODULES,
            foreground: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
        }
    }
}

fn side_pixels(size: usize, quiet_zone: u32, scale: u32) -> u64 {
    (size as u64 + 2 * quiet_zone as u64) * scale as u64
}

/// Rasterize a symbol, one `scale x scale` block per module
pub fn render(code: &QRCode, options: &RenderOptions) -> RgbImage {
    let side = side_pixels(code.size(), options.quiet_zone, options.scale) as u32;
    let quiet = options.quiet_zone as usize;
    let size = code.size();

    RgbImage::from_fn(side, side, |x, y| {
        let col = (x / options.scale) as usize;
        let row = (y / options.scale) as usize;
        let inside = (quiet..quiet + size).contains(&row) && (quiet..quiet + size).contains(&col);
        if inside && code.is_dark(row - quiet, col - quiet) {
            options.foreground
        } else {
            options.background
        }
    })
}

/// Parse `#rrggbb`, `rrggbb` or `#rgb`
pub fn parse_hex_color(text: &str) -> Result<Rgb<u8>, RenderError> {
    let invalid = || RenderError::InvalidColor(text.to_string());
    let hex = text.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
            Ok(Rgb([short(0)?, short(1)?, short(2)?]))
        }
        _ => Err(invalid()),
    }
}

/// Terminal rendering, two module rows per line using half blocks.
/// Dark modules print as spaces so the symbol reads on a light-on-dark terminal.
pub fn render_text(code: &QRCode, quiet_zone: usize) -> String {
    let size = code.size();
    let side = size + 2 * quiet_zone;
    let light = |row: usize, col: usize| {
        if row < quiet_zone || col < quiet_zone {
            return true;
        }
        let (r, c) = (row - quiet_zone, col - quiet_zone);
        r >= size || c >= size || !code.is_dark(r, c)
    };

    let mut out = String::with_capacity((side + 1) * side.div_ceil(2) * 3);
    for top in (0..side).step_by(2) {
        for col in 0..side {
            let upper = light(top, col);
            let lower = top + 1 < side && light(top + 1, col);
            out.push(match (upper, lower) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    out
}
