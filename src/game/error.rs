use crate::board::TOTAL_CELLS;

/// Rejected game operations. State is never modified when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Invalid cell index {index} (board has {} cells)", TOTAL_CELLS)]
    InvalidCell { index: usize },
    #[error("Invalid history step {step} (history has {len} entries)")]
    InvalidStep { step: usize, len: usize },
}
