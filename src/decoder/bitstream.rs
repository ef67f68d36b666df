/// Codeword extraction from a finished symbol
use crate::encoder::grid::ModuleGrid;
use crate::encoder::placement::zigzag_positions;
use crate::models::{BitMatrix, MaskPattern};

/// Read data modules in placement order, removing the mask on the fly.
///
/// `layout` holds the version's function modules; every unset cell is data.
/// Stops after `num_codewords` full codewords; remainder bits are dropped.
pub fn extract_codewords(
    matrix: &BitMatrix,
    layout: &ModuleGrid,
    mask: MaskPattern,
    num_codewords: usize,
) -> Vec<u8> {
    let mut codewords = Vec::with_capacity(num_codewords);
    let mut current = 0u8;
    let mut bits = 0;

    for (row, col) in zigzag_positions(matrix.size()) {
        if codewords.len() == num_codewords {
            break;
        }
        if layout.is_set(row, col) {
            continue;
        }
        let bit = matrix.get(row, col) ^ mask.is_masked(row, col);
        current = (current << 1) | bit as u8;
        bits += 1;
        if bits == 8 {
            codewords.push(current);
            current = 0;
            bits = 0;
        }
    }

    codewords
}
