//! Shared test utilities and mock engines.

#![allow(dead_code, unused_imports)]

pub mod mock_engine;
pub mod mock_server;

use minesweeper_client::board::{Cell, Pos, Position};
use minesweeper_client::engine::{FlagResult, OpenResult};
use minesweeper_client::lifecycle::GameState;
use minesweeper_client::ui::game::{GameClientState, GameIntent};
use minesweeper_client::ui::store::GameStore;
use std::time::Duration;
use tokio::sync::watch;

/// Row-major layout of closed cells with 1-based coordinates.
pub fn layout(width: u8, height: u8) -> Vec<Position> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .enumerate()
        .map(|(index, (x, y))| Position::new(index, Pos::new(x + 1, y + 1), Cell::closed()))
        .collect()
}

/// The slot at `index` of `state` carrying `cell`.
pub fn cell_at(state: &GameClientState, index: usize, cell: Cell) -> Position {
    state.position(index).expect("index on board").with_cell(cell)
}

pub fn open_result(cells: Vec<Position>, game_state: GameState, total_mines: usize) -> OpenResult {
    OpenResult {
        opened_cells: cells,
        game_state,
        total_mines,
    }
}

pub fn flag_result(position: Option<Position>) -> FlagResult {
    FlagResult { position }
}

/// Store holding a fresh board of `width` x `height`.
pub fn started_store(width: u8, height: u8) -> GameStore {
    let store = GameStore::new();
    store.dispatch(GameIntent::Restart {
        board: layout(width, height),
    });
    store
}

/// Move the store's game to `Active` by opening cell 0.
pub fn activate(store: &GameStore) {
    let game = store.game();
    store.dispatch(GameIntent::Open {
        generation: game.generation(),
        result: open_result(vec![cell_at(&game, 0, Cell::open(1))], GameState::Active, 1),
    });
}

/// Wait until `predicate` holds for the store, or panic after a second.
pub async fn wait_for(store: &GameStore, predicate: impl Fn(&GameClientState) -> bool) {
    let mut changes: watch::Receiver<u64> = store.subscribe();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
    while !store.read(&predicate) {
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        match tokio::time::timeout(remaining, changes.changed()).await {
            Ok(Ok(())) => {}
            _ => panic!("store did not reach the expected state in time"),
        }
    }
}
