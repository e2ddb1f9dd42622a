//! Game lifecycle reported by the engine.

use serde::{Deserialize, Serialize};

/// Progress of the current board.
///
/// `New` after a board is issued, `Active` once play started, `Win`/`Loss`
/// are terminal until the next restart.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    New,
    Active,
    Win,
    Loss,
}

impl GameState {
    /// Play is possible: the board accepts reveals and flags.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::New | Self::Active)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }

    /// Next state given an engine report.
    ///
    /// A finished game stays finished until the board is replaced.
    pub fn advance(self, reported: GameState) -> GameState {
        if self.is_over() {
            if reported != self {
                tracing::debug!(
                    current = ?self,
                    reported = ?reported,
                    "ignoring lifecycle change after game end"
                );
            }
            self
        } else {
            reported
        }
    }
}
