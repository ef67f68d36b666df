//! UTF-8 byte encoding of QR payload text
//!
//! `&str` input is already UTF-8. Text that arrives as UTF-16 code units (for
//! example from a web form) may contain unpaired surrogates; those are emitted
//! in their 3-byte form instead of being rejected.

/// UTF-8 bytes of a Rust string
pub fn encode_str(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Encode UTF-16 code units as UTF-8, joining surrogate pairs
pub fn encode_utf16(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len() * 3);
    let mut i = 0;
    while i < units.len() {
        let unit = units[i] as u32;
        let code_point = if is_high_surrogate(unit)
            && i + 1 < units.len()
            && is_low_surrogate(units[i + 1] as u32)
        {
            let low = units[i + 1] as u32;
            i += 1;
            0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
        } else {
            unit
        };
        push_code_point(&mut out, code_point);
        i += 1;
    }
    out
}

fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    match cp {
        0..=0x7F => out.push(cp as u8),
        0x80..=0x7FF => {
            out.push(0xC0 | (cp >> 6) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
        0x800..=0xFFFF => {
            out.push(0xE0 | (cp >> 12) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
        _ => {
            out.push(0xF0 | (cp >> 18) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        assert_eq!(encode_str("HELLO"), b"HELLO".to_vec());
        assert!(encode_str("").is_empty());
    }

    #[test]
    fn test_utf16_matches_std() {
        for text in ["héllo", "日本語", "mixed ✓ text", "emoji 😀 pair", "𝄞 clef", ""] {
            let units: Vec<u16> = text.encode_utf16().collect();
            assert_eq!(encode_utf16(&units), text.as_bytes(), "text: {}", text);
        }
    }

    #[test]
    fn test_surrogate_pair_is_four_bytes() {
        // U+1F600 as a surrogate pair
        assert_eq!(encode_utf16(&[0xD83D, 0xDE00]), vec![0xF0, 0x9F, 0x98, 0x80]);
    }

    #[test]
    fn test_unpaired_surrogates() {
        assert_eq!(encode_utf16(&[0xD800]), vec![0xED, 0xA0, 0x80]);
        assert_eq!(encode_utf16(&[0xDC00, 0x41]), vec![0xED, 0xB0, 0x80, 0x41]);
        // high surrogate followed by a non-surrogate
        assert_eq!(encode_utf16(&[0xD83D, 0x41]), vec![0xED, 0xA0, 0xBD, 0x41]);
    }
}
