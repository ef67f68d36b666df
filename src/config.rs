//! Environment-driven defaults, read once per process

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// Quiet zone width in modules required around a rendered symbol
pub const QUIET_ZONE_MODULES: u32 = 4;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `QR_DEBUG` set (to anything) turns on debug-level logging in `qrtool`
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// `QR_PARALLEL_MASKS=1` runs the eight mask trials on the rayon pool
pub fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", false))
}

static RENDER_SCALE: OnceLock<u32> = OnceLock::new();

/// Default pixels per module for `qrtool encode` (`QR_RENDER_SCALE`, 1-64)
pub fn render_scale() -> u32 {
    *RENDER_SCALE.get_or_init(|| parse_env_usize("QR_RENDER_SCALE", 8).clamp(1, 64) as u32)
}
