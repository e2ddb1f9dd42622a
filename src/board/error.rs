use thiserror::Error;

use super::cell::CellState;

/// Inconsistent board updates received from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no cell with index {index} on board of {len} cells")]
    UnknownIndex { index: usize, len: usize },

    #[error("cell {index} cannot move from {from:?} to {to:?}")]
    IllegalTransition {
        index: usize,
        from: CellState,
        to: CellState,
    },
}
