//! Per-cell state as reported by the game engine.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Visible state of a single cell.
///
/// Serialized the way the engine sends it: `{"type": "Closed", "content": {...}}`.
/// The engine also reports `mined` inside `Closed`; the client never keeps it
/// and writes `false` back, since the engine requires the field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum CellState {
    /// Not yet revealed. `flagged` is the player's marker, unrelated to mines.
    Closed {
        #[serde(default)]
        flagged: bool,
    },
    /// Revealed and safe; `adjacent_mines` is meaningful.
    Open,
    /// Revealed mine. Only reachable when the game is lost.
    ExposedMine,
}

/// Outbound shape of [`CellState`].
#[derive(Serialize)]
#[serde(tag = "type", content = "content")]
enum WireCellState {
    Closed { flagged: bool, mined: bool },
    Open,
    ExposedMine,
}

impl Serialize for CellState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match *self {
            CellState::Closed { flagged } => WireCellState::Closed {
                flagged,
                mined: false,
            },
            CellState::Open => WireCellState::Open,
            CellState::ExposedMine => WireCellState::ExposedMine,
        };
        wire.serialize(serializer)
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Closed { flagged: false }
    }
}

impl CellState {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }

    /// True for a closed cell carrying a flag.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Closed { flagged: true })
    }

    /// Whether the engine may move a cell from `self` to `next`.
    ///
    /// Closed cells may go anywhere. Revealed cells are terminal and only
    /// accept a repeat of their own state.
    pub fn can_become(&self, next: &CellState) -> bool {
        match (self, next) {
            (Self::Closed { .. }, _) => true,
            (Self::Open, Self::Open) => true,
            (Self::ExposedMine, Self::ExposedMine) => true,
            (Self::Open, _) | (Self::ExposedMine, _) => false,
        }
    }
}

/// A board cell.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub state: CellState,
    #[serde(default)]
    pub adjacent_mines: u8,
}

impl Cell {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn flagged() -> Self {
        Self {
            state: CellState::Closed { flagged: true },
            adjacent_mines: 0,
        }
    }

    pub fn open(adjacent_mines: u8) -> Self {
        Self {
            state: CellState::Open,
            adjacent_mines,
        }
    }

    pub fn exposed_mine() -> Self {
        Self {
            state: CellState::ExposedMine,
            adjacent_mines: 0,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let glyph = match self.state {
            CellState::Open => match self.adjacent_mines {
                0 => ' ',
                n => char::from_digit(u32::from(n.min(9)), 10).unwrap_or('?'),
            },
            CellState::Closed { flagged: true } => 'F',
            CellState::Closed { flagged: false } => '.',
            CellState::ExposedMine => 'X',
        };
        write!(f, "{glyph}")
    }
}
