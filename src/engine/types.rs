//! Payloads exchanged with the game engine.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::lifecycle::GameState;

/// Number of wins the engine keeps in its ranking.
pub const TOP_WINS: usize = 10;

/// Name of the duration tick event.
pub const TIME_EVENT: &str = "time-event";

/// Response to a reveal.
///
/// `opened_cells` is the flood-fill set; on a finished game the engine sends
/// the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenResult {
    #[serde(default)]
    pub opened_cells: Vec<Position>,
    pub game_state: GameState,
    #[serde(default)]
    pub total_mines: usize,
}

/// Response to a flag toggle. `None` when the engine refused it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagResult {
    #[serde(default)]
    pub position: Option<Position>,
}

/// One ranked win, already formatted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    pub date: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinHistory {
    #[serde(default)]
    pub wins: Vec<Win>,
}

impl WinHistory {
    /// Ranked entries, capped at [`TOP_WINS`].
    pub fn top(&self) -> impl Iterator<Item = (usize, &Win)> {
        self.wins
            .iter()
            .take(TOP_WINS)
            .enumerate()
            .map(|(i, win)| (i + 1, win))
    }
}

/// Payload of a duration tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvent {
    pub duration: String,
}

/// Elapsed time in the engine's label format.
pub fn format_elapsed(seconds: u64) -> String {
    match seconds {
        0..=59 => format!("{seconds} seconds"),
        60..=3599 => format!(
            "{} minute(s) {} seconds",
            seconds.div_euclid(60),
            seconds.rem_euclid(60)
        ),
        3600.. => format!("{} hours", seconds.div_euclid(3600)),
    }
}
