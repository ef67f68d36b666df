//! Function pattern layout: finders, separators, alignment, timing, reserved
//! format cells, the dark module and (v7+) version information.

use crate::encoder::format::format_positions;
use crate::encoder::grid::{ModuleGrid, Role};
use crate::encoder::tables::version_spec;
use crate::models::Version;

/// 18-bit version words for versions 7-10, BCH(18,6) with generator 0x1F25
const VERSION_INFO: [u32; 4] = [0x07C94, 0x085BC, 0x09A99, 0x0A4D3];

/// 18-bit version information; `None` below version 7
pub fn version_info_word(version: Version) -> Option<u32> {
    let idx = (version.number() as usize).checked_sub(7)?;
    VERSION_INFO.get(idx).copied()
}

/// Build a grid holding every function module of `version`, with the format
/// cells reserved (light) and all data cells still unset.
pub fn function_layout(version: Version) -> ModuleGrid {
    let size = version.size();
    let mut grid = ModuleGrid::new(size);

    place_finder(&mut grid, 0, 0);
    place_finder(&mut grid, 0, size - 7);
    place_finder(&mut grid, size - 7, 0);

    let centres = version_spec(version).alignment;
    for &row in centres {
        for &col in centres {
            if !overlaps_finder(row, col, size) {
                place_alignment(&mut grid, row, col);
            }
        }
    }

    for i in 0..size {
        grid.place(6, i, Role::Function, i % 2 == 0);
        grid.place(i, 6, Role::Function, i % 2 == 0);
    }

    for copy in format_positions(size) {
        for (row, col) in copy {
            grid.place(row, col, Role::Format, false);
        }
    }
    grid.place(size - 8, 8, Role::Function, true);

    if let Some(word) = version_info_word(version) {
        for i in 0..18 {
            let dark = (word >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            grid.place(b, a, Role::Function, dark);
            grid.place(a, b, Role::Function, dark);
        }
    }

    grid
}

/// 7x7 finder with its light separator ring, clipped to the symbol
fn place_finder(grid: &mut ModuleGrid, top: usize, left: usize) {
    for dr in -1isize..=7 {
        for dc in -1isize..=7 {
            let row = top as isize + dr;
            let col = left as isize + dc;
            if row < 0 || col < 0 {
                continue;
            }
            let ring = (dr - 3).abs().max((dc - 3).abs());
            let dark = ring != 2 && ring != 4;
            grid.place(row as usize, col as usize, Role::Function, dark);
        }
    }
}

fn place_alignment(grid: &mut ModuleGrid, row: usize, col: usize) {
    for dr in -2isize..=2 {
        for dc in -2isize..=2 {
            let dark = dr.abs().max(dc.abs()) != 1;
            grid.place(
                (row as isize + dr) as usize,
                (col as isize + dc) as usize,
                Role::Function,
                dark,
            );
        }
    }
}

/// Whether a 5x5 alignment pattern centred at (row, col) touches a finder's
/// 8x8 zone (finder plus separator)
fn overlaps_finder(row: usize, col: usize, size: usize) -> bool {
    let in_zone = |r: usize, c: usize| {
        let top = r < 8;
        let bottom = r >= size - 8;
        let left = c < 8;
        let right = c >= size - 8;
        (top && left) || (top && right) || (bottom && left)
    };
    (row - 2..=row + 2).any(|r| (col - 2..=col + 2).any(|c| in_zone(r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::grid::Module;
    use crate::encoder::tables::version_spec;

    fn dark(grid: &ModuleGrid, row: usize, col: usize) -> bool {
        grid.get(row, col).is_some_and(|m| m.dark)
    }

    #[test]
    fn test_finder_rings() {
        let grid = function_layout(Version::MIN);
        // outer ring, light ring, core
        assert!(dark(&grid, 0, 0));
        assert!(!dark(&grid, 1, 1));
        assert!(dark(&grid, 3, 3));
        // separators
        assert!(!dark(&grid, 7, 0));
        assert!(!dark(&grid, 0, 13));
        assert!(dark(&grid, 0, 14));
        assert!(!dark(&grid, 13, 0));
        assert!(dark(&grid, 20, 0));
    }

    #[test]
    fn test_timing_and_dark_module() {
        let grid = function_layout(Version::MIN);
        for i in 8..13 {
            assert_eq!(dark(&grid, 6, i), i % 2 == 0);
            assert_eq!(dark(&grid, i, 6), i % 2 == 0);
        }
        assert_eq!(
            grid.get(13, 8),
            Some(Module {
                role: Role::Function,
                dark: true
            })
        );
    }

    #[test]
    fn test_format_cells_reserved_light() {
        let size = 25;
        let grid = function_layout(Version::new(2).unwrap());
        for copy in format_positions(size) {
            for (row, col) in copy {
                assert_eq!(
                    grid.get(row, col),
                    Some(Module {
                        role: Role::Format,
                        dark: false
                    })
                );
            }
        }
    }

    #[test]
    fn test_alignment_placement() {
        let grid = function_layout(Version::new(2).unwrap());
        // single alignment pattern centred at (18, 18)
        assert!(dark(&grid, 18, 18));
        assert!(!dark(&grid, 17, 18));
        assert!(dark(&grid, 16, 18));
        assert!(dark(&grid, 20, 20));

        let grid = function_layout(Version::new(7).unwrap());
        // (6, 22) sits on the timing row between the top finders
        assert!(dark(&grid, 6, 22));
        assert!(!dark(&grid, 6, 21));
        assert!(dark(&grid, 6, 20));
        assert!(!dark(&grid, 5, 22));
    }

    #[test]
    fn test_data_cell_count_matches_codewords() {
        for version in Version::all() {
            let grid = function_layout(version);
            let spec = version_spec(version);
            let free = grid.unset_count();
            assert!(free >= spec.total_codewords() * 8);
            assert!(free - spec.total_codewords() * 8 < 8, "version {}", version.number());
        }
    }

    #[test]
    fn test_version_info_blocks() {
        assert!(version_info_word(Version::new(6).unwrap()).is_none());
        let version = Version::new(7).unwrap();
        let grid = function_layout(version);
        let size = version.size();
        let word = version_info_word(version).unwrap();
        assert_eq!(word, 0x07C94);
        for i in 0..18 {
            let bit = (word >> i) & 1 == 1;
            assert_eq!(dark(&grid, i / 3, size - 11 + i % 3), bit);
            assert_eq!(dark(&grid, size - 11 + i % 3, i / 3), bit);
        }
    }
}
