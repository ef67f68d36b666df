/// Zigzag placement of message bits into data modules
use crate::encoder::grid::{ModuleGrid, Role};

/// Every (row, col) in placement order: column pairs from the right edge,
/// alternating upward and downward, with the vertical timing column skipped.
/// Within a pair the right-hand column comes first.
pub fn zigzag_positions(size: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(size * size);
    let mut upward = true;
    let mut col = size as isize - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        let right = col as usize;
        for step in 0..size {
            let row = if upward { size - 1 - step } else { step };
            positions.push((row, right));
            positions.push((row, right - 1));
        }
        upward = !upward;
        col -= 2;
    }

    positions
}

/// Write `message` MSB-first into every free cell; cells left over once the
/// message runs out become light data modules. Returns the number of bits placed.
pub fn place_message(grid: &mut ModuleGrid, message: &[u8]) -> usize {
    let total_bits = message.len() * 8;
    let mut bit = 0;
    for (row, col) in zigzag_positions(grid.size()) {
        if grid.is_set(row, col) {
            continue;
        }
        let dark = bit < total_bits && (message[bit / 8] >> (7 - bit % 8)) & 1 == 1;
        grid.place(row, col, Role::Data, dark);
        bit += 1;
    }
    bit.min(total_bits)
}
