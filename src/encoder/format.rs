/// Format information words and their positions
use crate::encoder::grid::ModuleGrid;
use crate::models::MaskPattern;

/// 15-bit format words for EC level L, indexed by mask id.
/// BCH(15,5) with generator 0x537, XORed with 0x5412.
pub const FORMAT_INFO_L: [u16; 8] = [
    0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976,
];

/// Level-L format word for `mask`, bit 0 first in placement order
pub fn format_word(mask: MaskPattern) -> u16 {
    FORMAT_INFO_L[mask.id() as usize]
}

/// (row, col) of format bit `i` (bit 0 = LSB) in both copies.
///
/// Copy one wraps the top-left finder; copy two is split between the
/// top-right (bits 0-7) and bottom-left (bits 8-14) finders.
pub fn format_positions(size: usize) -> [[(usize, usize); 15]; 2] {
    let mut primary = [(0, 0); 15];
    let mut secondary = [(0, 0); 15];
    for (i, pos) in primary.iter_mut().enumerate() {
        *pos = match i {
            0..=5 => (i, 8),
            6 => (7, 8),
            7 => (8, 8),
            8 => (8, 7),
            _ => (8, 14 - i),
        };
    }
    for (i, pos) in secondary.iter_mut().enumerate() {
        *pos = if i < 8 {
            (8, size - 1 - i)
        } else {
            (size - 15 + i, 8)
        };
    }
    [primary, secondary]
}

/// Write the format word for `mask` into both reserved regions
pub fn write_format(grid: &mut ModuleGrid, mask: MaskPattern) {
    let word = format_word(mask);
    for copy in format_positions(grid.size()) {
        for (i, (row, col)) in copy.into_iter().enumerate() {
            grid.set_format(row, col, (word >> i) & 1 == 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn bch_format(data: u16) -> u16 {
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * 0x537);
        }
        ((data << 10) | rem) ^ 0x5412
    }

    #[test]
    fn test_table_matches_bch() {
        for mask in MaskPattern::ALL {
            // EC level L is 01
            let data = (0b01 << 3) | mask.id() as u16;
            assert_eq!(format_word(mask), bch_format(data));
        }
    }

    #[test]
    fn test_positions_distinct_and_skip_timing() {
        for size in [21, 57] {
            let [a, b] = format_positions(size);
            let all: HashSet<(usize, usize)> = a.iter().chain(b.iter()).copied().collect();
            assert_eq!(all.len(), 30);
            assert!(!all.contains(&(6, 8)));
            assert!(!all.contains(&(8, 6)));
            assert!(!all.contains(&(size - 8, 8)));
        }
    }

    #[test]
    fn test_secondary_positions() {
        let [_, b] = format_positions(21);
        assert_eq!(b[0], (8, 20));
        assert_eq!(b[7], (8, 13));
        assert_eq!(b[8], (14, 8));
        assert_eq!(b[14], (20, 8));
    }
}
