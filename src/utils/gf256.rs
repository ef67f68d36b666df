//! GF(256) arithmetic for QR Reed-Solomon coding
//!
//! The field is generated by the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
//! (0x11D) with alpha = 2. The exp/log tables are built on first use and are
//! read-only afterwards.

use std::sync::OnceLock;

const PRIMITIVE: u16 = 0x11D;

struct Tables {
    /// alpha^i, doubled so that `exp[log a + log b]` needs no reduction
    exp: [u8; 512],
    log: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        Tables { exp, log }
    })
}

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        tables().exp[n % 255]
    }

    /// Discrete log of a non-zero element
    pub fn log(a: u8) -> usize {
        debug_assert!(a != 0, "log(0) is undefined");
        tables().log[a as usize] as usize
    }

    /// Field multiplication
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    /// a / b; callers guarantee b != 0
    pub fn div(a: u8, b: u8) -> u8 {
        debug_assert!(b != 0, "division by zero in GF(256)");
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        t.exp[t.log[a as usize] as usize + 255 - t.log[b as usize] as usize]
    }

    /// Multiplicative inverse; `a` must be non-zero
    pub fn inverse(a: u8) -> u8 {
        Self::div(1, a)
    }

    /// `a^n`
    pub fn pow_usize(a: u8, n: usize) -> u8 {
        if a == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        let log_a = Self::log(a);
        Self::exp((log_a * (n % 255)) % 255)
    }
}
