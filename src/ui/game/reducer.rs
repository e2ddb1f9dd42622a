//! Reducer for the game reconciliation state.

use crate::board::{Board, CellState};
use crate::engine::{FlagResult, OpenResult};
use crate::lifecycle::GameState;
use crate::ui::mvi::Reducer;

use super::intent::GameIntent;
use super::state::GameClientState;

/// Applies engine responses and timer ticks to the client game state.
///
/// Cell states are overwritten, never toggled, so a response applied twice
/// leaves the same board as applying it once. Counters move only on what the
/// engine reported.
pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameClientState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if let Some(generation) = intent.generation() {
            if generation != state.generation {
                tracing::debug!(
                    intent = intent.kind(),
                    response_generation = generation,
                    board_generation = state.generation,
                    "dropping stale response for a superseded board"
                );
                return state;
            }
        }

        match intent {
            GameIntent::Open { result, .. } => open(state, result),
            GameIntent::Flag { result, .. } => flag(state, result),
            GameIntent::Restart { board } => {
                let generation = state.generation.wrapping_add(1);
                GameClientState::fresh(Board::new(board), generation)
            }
            GameIntent::Duration { value, .. } => {
                // Ticks only run while a game is active; one seen before the
                // first reveal belongs to the previous board.
                if state.lifecycle != GameState::New {
                    GameClientState {
                        duration: value,
                        ..state
                    }
                } else {
                    tracing::debug!(duration = %value, "dropping tick before the game started");
                    state
                }
            }
        }
    }
}

fn open(mut state: GameClientState, result: OpenResult) -> GameClientState {
    let report = state.board.apply(&result.opened_cells);
    for err in &report.rejected {
        tracing::warn!(error = %err, "dropping engine cell update");
    }
    state.opened += report.newly_revealed;
    state.lifecycle = state.lifecycle.advance(result.game_state);
    state.total_mines = result.total_mines;
    state
}

fn flag(mut state: GameClientState, result: FlagResult) -> GameClientState {
    let Some(position) = result.position else {
        return state;
    };

    let CellState::Closed { flagged } = position.cell.state else {
        tracing::debug!(
            index = position.index,
            "flag response reports a revealed cell, ignoring"
        );
        return state;
    };

    match state.board.set(position) {
        Ok(CellState::Closed { flagged: before }) if before == flagged => {
            // Already known; a repeated response must not move the counter.
        }
        Ok(_) => {
            state.flagged = if flagged {
                state.flagged + 1
            } else {
                state.flagged.saturating_sub(1)
            };
        }
        Err(err) => {
            tracing::warn!(error = %err, "dropping engine flag update");
        }
    }
    state
}
