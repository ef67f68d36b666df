//! Mask penalty scoring
//!
//! Three of the four ISO/IEC 18004 rules are applied: same-color runs, 2x2
//! blocks and dark/light balance. The finder-like sequence rule is not scored,
//! so mask choice matches the established output of this encoder.

use crate::models::BitMatrix;

const RUN_MIN: usize = 5;
const BLOCK_COST: u32 = 3;
const BALANCE_COST: u32 = 10;

/// Penalty breakdown for one masked symbol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Penalty {
    /// Runs of 5+ same-colored modules, `len - 2` each
    pub runs: u32,
    /// Uniform 2x2 blocks, 3 each
    pub blocks: u32,
    /// Distance of the rounded dark share from 50%
    pub balance: u32,
}

impl Penalty {
    /// Sum of all three rules
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.balance
    }
}

/// Score a finished (masked, format-written) symbol
pub fn score(matrix: &BitMatrix) -> Penalty {
    let size = matrix.size();
    let runs = (0..size)
        .map(|i| run_penalty(matrix.row(i)) + run_penalty(matrix.column(i)))
        .sum();
    Penalty {
        runs,
        blocks: block_penalty(matrix),
        balance: balance_penalty(matrix),
    }
}

fn run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut penalty = 0;
    let mut current: Option<bool> = None;
    let mut len = 0usize;
    for dark in line {
        if current == Some(dark) {
            len += 1;
            continue;
        }
        if len >= RUN_MIN {
            penalty += (len - 2) as u32;
        }
        current = Some(dark);
        len = 1;
    }
    if len >= RUN_MIN {
        penalty += (len - 2) as u32;
    }
    penalty
}

fn block_penalty(matrix: &BitMatrix) -> u32 {
    let size = matrix.size();
    let mut count = 0;
    for row in 0..size.saturating_sub(1) {
        for col in 0..size - 1 {
            let c = matrix.get(row, col);
            if c == matrix.get(row, col + 1)
                && c == matrix.get(row + 1, col)
                && c == matrix.get(row + 1, col + 1)
            {
                count += 1;
            }
        }
    }
    count * BLOCK_COST
}

fn balance_penalty(matrix: &BitMatrix) -> u32 {
    let total = matrix.size() * matrix.size();
    if total == 0 {
        return 0;
    }
    let dark = matrix.count_dark();
    // Dark share in 5% steps, rounded half up
    let steps = (dark * 40 + total) / (2 * total);
    (steps.abs_diff(10) as u32) * BALANCE_COST
}
