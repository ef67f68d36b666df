/// Data codeword construction (byte mode)
use crate::encoder::tables::total_data_codewords;
use crate::models::Version;

const BYTE_MODE: u32 = 0b0100;
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Append-only MSB-first bit buffer
#[derive(Debug, Default, Clone)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bits were appended yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        debug_assert!(count == 32 || value >> count == 0);
        for i in (0..count).rev() {
            if self.len % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let idx = self.len / 8;
                self.bytes[idx] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
    }

    /// Completed bytes; a partial final byte is zero-padded
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Build exactly `total_data_codewords(version)` data codewords for `payload`.
///
/// The caller has already chosen a version that fits the payload.
pub fn encode_data(payload: &[u8], version: Version) -> Vec<u8> {
    let capacity_bits = total_data_codewords(version) * 8;
    let mut buffer = BitBuffer::with_capacity(capacity_bits);

    buffer.append_bits(BYTE_MODE, 4);
    buffer.append_bits(payload.len() as u32, version.char_count_bits());
    for &byte in payload {
        buffer.append_bits(byte as u32, 8);
    }
    debug_assert!(buffer.len() <= capacity_bits);

    let terminator = (capacity_bits - buffer.len()).min(4);
    buffer.append_bits(0, terminator);
    let align = (8 - buffer.len() % 8) % 8;
    buffer.append_bits(0, align);

    let mut codewords = buffer.into_bytes();
    let total = capacity_bits / 8;
    let pad_count = total - codewords.len();
    codewords.extend(PAD_BYTES.iter().cycle().take(pad_count));
    codewords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::version::byte_capacity;

    #[test]
    fn test_bit_buffer() {
        let mut buffer = BitBuffer::default();
        assert!(buffer.is_empty());
        buffer.append_bits(0b0100, 4);
        buffer.append_bits(0b101, 3);
        assert_eq!(buffer.len(), 7);
        assert_eq!(buffer.into_bytes(), vec![0b0100_1010]);
    }

    #[test]
    fn test_hello_codewords() {
        let version = Version::MIN;
        let codewords = encode_data(b"HELLO", version);
        assert_eq!(codewords.len(), 19);
        // 0100 | 00000101 | 'H' 'E' 'L' 'L' 'O' | 0000 | pad
        assert_eq!(
            &codewords[..7],
            &[0x40, 0x54, 0x84, 0x54, 0xC4, 0xC4, 0xF0]
        );
        assert_eq!(&codewords[7..11], &[0xEC, 0x11, 0xEC, 0x11]);
    }

    #[test]
    fn test_version_ten_uses_sixteen_bit_count() {
        let version = Version::MAX;
        let codewords = encode_data(&[0xAA; 3], version);
        // 0100 | 0000000000000011 | 10101010 ...
        assert_eq!(&codewords[..4], &[0x40, 0x00, 0x3A, 0xAA]);
    }

    #[test]
    fn test_exact_length_for_min_and_max_payloads() {
        for version in Version::all() {
            let want = total_data_codewords(version);
            assert_eq!(encode_data(&[], version).len(), want);
            let full = vec![b'x'; byte_capacity(version)];
            assert_eq!(encode_data(&full, version).len(), want);
        }
    }

    #[test]
    fn test_full_payload_truncates_terminator() {
        // 17 bytes fill version 1 up to 148 of 152 bits; terminator is 4 bits
        let codewords = encode_data(&[0xFF; 17], Version::MIN);
        assert_eq!(codewords.len(), 19);
        assert_eq!(codewords[18], 0xF0);
    }
}
