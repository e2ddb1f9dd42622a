use crate::board::Position;
use crate::engine::{FlagResult, OpenResult};
use crate::ui::mvi::Intent;

/// Facts that change a [`GameClientState`](super::GameClientState).
///
/// Everything that answers an earlier request carries the `generation` of
/// the board it was issued against.
#[derive(Debug, Clone)]
pub enum GameIntent {
    /// The engine answered a reveal.
    Open { generation: u64, result: OpenResult },

    /// The engine answered a flag toggle.
    Flag { generation: u64, result: FlagResult },

    /// A fresh board was issued.
    Restart { board: Vec<Position> },

    /// Duration tick from the engine timer.
    Duration { generation: u64, value: String },
}

impl GameIntent {
    /// Board generation this intent refers to. `None` for a restart.
    pub fn generation(&self) -> Option<u64> {
        match self {
            GameIntent::Open { generation, .. }
            | GameIntent::Flag { generation, .. }
            | GameIntent::Duration { generation, .. } => Some(*generation),
            GameIntent::Restart { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GameIntent::Open { .. } => "open",
            GameIntent::Flag { .. } => "flag",
            GameIntent::Restart { .. } => "restart",
            GameIntent::Duration { .. } => "duration",
        }
    }
}

impl Intent for GameIntent {}
