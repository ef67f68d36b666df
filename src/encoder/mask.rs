/// Mask application and selection
use rayon::prelude::*;

use crate::config;
use crate::encoder::format::write_format;
use crate::encoder::grid::ModuleGrid;
use crate::encoder::penalty::{Penalty, score};
use crate::models::{BitMatrix, MaskPattern};

/// How the eight mask trials are run; both give the same answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskStrategy {
    /// Trials one after another on the calling thread
    Sequential,
    /// One trial per rayon task
    Parallel,
}

impl MaskStrategy {
    /// Strategy chosen by `QR_PARALLEL_MASKS`
    pub fn from_config() -> Self {
        if config::parallel_masks() {
            MaskStrategy::Parallel
        } else {
            MaskStrategy::Sequential
        }
    }
}

impl Default for MaskStrategy {
    fn default() -> Self {
        Self::from_config()
    }
}

/// A masked symbol and its penalty
#[derive(Debug, Clone)]
pub struct MaskTrial {
    /// Mask tried
    pub mask: MaskPattern,
    /// Score of the masked symbol
    pub penalty: Penalty,
    /// Masked symbol with its format information written
    pub modules: BitMatrix,
}

/// Flip every data module selected by `mask`
pub fn apply_mask(grid: &mut ModuleGrid, mask: MaskPattern) {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            if mask.is_masked(row, col) {
                grid.flip_data(row, col);
            }
        }
    }
}

/// Mask a clone of the base grid, write format info and score it
pub fn run_trial(base: &ModuleGrid, mask: MaskPattern) -> MaskTrial {
    let mut grid = base.clone();
    apply_mask(&mut grid, mask);
    write_format(&mut grid, mask);
    let modules = grid.to_bit_matrix();
    let penalty = score(&modules);
    MaskTrial {
        mask,
        penalty,
        modules,
    }
}

/// All eight trials in mask-id order
pub fn evaluate_masks(base: &ModuleGrid, strategy: MaskStrategy) -> Vec<MaskTrial> {
    match strategy {
        MaskStrategy::Sequential => MaskPattern::ALL
            .iter()
            .map(|&mask| run_trial(base, mask))
            .collect(),
        MaskStrategy::Parallel => MaskPattern::ALL
            .par_iter()
            .map(|&mask| run_trial(base, mask))
            .collect(),
    }
}

/// Lowest-penalty trial; ties keep the lower mask id
pub fn select_mask(base: &ModuleGrid, strategy: MaskStrategy) -> MaskTrial {
    let trials = evaluate_masks(base, strategy);
    for trial in &trials {
        tracing::debug!(
            mask = trial.mask.id(),
            runs = trial.penalty.runs,
            blocks = trial.penalty.blocks,
            balance = trial.penalty.balance,
            total = trial.penalty.total(),
            "mask penalty"
        );
    }
    best_trial(trials).unwrap_or_else(|| run_trial(base, MaskPattern::Pattern0))
}

/// Lowest-penalty trial of `trials`, keeping the earliest on ties
pub fn best_trial(trials: impl IntoIterator<Item = MaskTrial>) -> Option<MaskTrial> {
    trials.into_iter().reduce(|best, trial| {
        if trial.penalty.total() < best.penalty.total() {
            trial
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::format::{format_positions, format_word};
    use crate::encoder::function_patterns::function_layout;
    use crate::encoder::grid::Role;
    use crate::encoder::placement::place_message;
    use crate::encoder::tables::version_spec;
    use crate::models::Version;

    fn base_grid(version: Version, seed: u8) -> ModuleGrid {
        let mut grid = function_layout(version);
        let message: Vec<u8> = (0..version_spec(version).total_codewords())
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect();
        place_message(&mut grid, &message);
        grid
    }

    #[test]
    fn test_mask_only_touches_data() {
        let base = base_grid(Version::MIN, 7);
        let mut masked = base.clone();
        apply_mask(&mut masked, MaskPattern::Pattern1);
        for row in 0..21 {
            for col in 0..21 {
                let before = base.get(row, col).unwrap();
                let after = masked.get(row, col).unwrap();
                let flipped = before.role == Role::Data && MaskPattern::Pattern1.is_masked(row, col);
                assert_eq!(after.dark, before.dark ^ flipped, "({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_trial_writes_format_word() {
        let base = base_grid(Version::MIN, 1);
        for mask in MaskPattern::ALL {
            let trial = run_trial(&base, mask);
            let word = format_word(mask);
            for copy in format_positions(21) {
                for (i, (row, col)) in copy.into_iter().enumerate() {
                    assert_eq!(trial.modules.get(row, col), (word >> i) & 1 == 1);
                }
            }
        }
    }

    #[test]
    fn test_selected_mask_is_minimal() {
        for (version, seed) in [(1u8, 0u8), (4, 9), (10, 200)] {
            let base = base_grid(Version::new(version).unwrap(), seed);
            let best = select_mask(&base, MaskStrategy::Sequential);
            for trial in evaluate_masks(&base, MaskStrategy::Sequential) {
                assert!(best.penalty.total() <= trial.penalty.total());
                if trial.penalty.total() == best.penalty.total() {
                    assert!(best.mask.id() <= trial.mask.id());
                }
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let base = base_grid(Version::new(6).unwrap(), 42);
        let seq = evaluate_masks(&base, MaskStrategy::Sequential);
        let par = evaluate_masks(&base, MaskStrategy::Parallel);
        assert_eq!(seq.len(), 8);
        for (a, b) in seq.iter().zip(&par) {
            assert_eq!(a.mask, b.mask);
            assert_eq!(a.penalty, b.penalty);
            assert_eq!(a.modules, b.modules);
        }
        let best_seq = select_mask(&base, MaskStrategy::Sequential);
        let best_par = select_mask(&base, MaskStrategy::Parallel);
        assert_eq!(best_seq.mask, best_par.mask);
    }
}
