//! Client view of one game.

use crate::board::{Board, Position};
use crate::engine::format_elapsed;
use crate::lifecycle::GameState;
use crate::ui::mvi::UiState;

/// Everything the header, board and dialogs need to draw a game.
///
/// Replaced wholesale on restart; every other change comes from a reduced
/// engine response or timer tick. `generation` identifies the board so
/// responses to a superseded board can be told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct GameClientState {
    pub(super) board: Board,
    pub(super) lifecycle: GameState,
    pub(super) opened: usize,
    pub(super) flagged: usize,
    pub(super) total_mines: usize,
    pub(super) duration: String,
    pub(super) generation: u64,
}

impl Default for GameClientState {
    fn default() -> Self {
        Self::fresh(Board::default(), 0)
    }
}

impl UiState for GameClientState {}

impl GameClientState {
    /// State for a newly issued board.
    pub(super) fn fresh(board: Board, generation: u64) -> Self {
        Self {
            board,
            lifecycle: GameState::New,
            opened: 0,
            flagged: 0,
            total_mines: 0,
            duration: zero_duration(),
            generation,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn position(&self, index: usize) -> Option<&Position> {
        self.board.get(index)
    }

    pub fn lifecycle(&self) -> GameState {
        self.lifecycle
    }

    /// Input is accepted while the game has not ended.
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// The game ended and the end-of-game presentation should surface.
    pub fn is_over(&self) -> bool {
        self.lifecycle.is_over()
    }

    pub fn opened(&self) -> usize {
        self.opened
    }

    pub fn flagged(&self) -> usize {
        self.flagged
    }

    pub fn total_mines(&self) -> usize {
        self.total_mines
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Duration label shown before the first tick of a game.
pub fn zero_duration() -> String {
    format_elapsed(0)
}
