//! Turns player gestures into engine requests and feeds the answers back.
//!
//! Nothing is predicted: the store changes only once the engine replied.
//! Guards read the store at call time so rapid repeated input cannot send
//! the same reveal twice.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

use crate::board::{CellState, Position};
use crate::engine::{EngineError, GameEngine};
use crate::ui::game::{GameClientState, GameIntent};
use crate::ui::overlay::OverlayIntent;
use crate::ui::store::GameStore;

/// What happened to a gesture.
#[derive(Debug)]
pub enum Outcome {
    /// The engine answered and the answer was handed to the reducer.
    Dispatched,
    /// Refused locally or by the engine; nothing was changed.
    Ignored(&'static str),
    /// The engine could not be reached. Reported, nothing was changed.
    Failed(EngineError),
}

impl Outcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Outcome::Dispatched)
    }
}

type RevealKey = (u64, usize);

/// Board generation and cell a request is issued against.
type Target = Result<(u64, Position), &'static str>;

/// Marks a reveal as outstanding until dropped.
struct InFlight {
    set: Arc<Mutex<HashSet<RevealKey>>>,
    key: RevealKey,
}

impl InFlight {
    fn claim(set: &Arc<Mutex<HashSet<RevealKey>>>, key: RevealKey) -> Option<Self> {
        set.lock().insert(key).then(|| Self {
            set: Arc::clone(set),
            key,
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.set.lock().remove(&self.key);
    }
}

#[derive(Clone)]
pub struct IntentDispatcher {
    engine: Arc<dyn GameEngine>,
    store: GameStore,
    reveals: Arc<Mutex<HashSet<RevealKey>>>,
}

impl IntentDispatcher {
    pub fn new(engine: Arc<dyn GameEngine>, store: GameStore) -> Self {
        Self {
            engine,
            store,
            reveals: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Reveal a closed, unflagged cell.
    pub async fn reveal(&self, index: usize) -> Outcome {
        let target = self.store.read(|game| -> Target {
            let position = playable(game, index)?;
            match position.cell.state {
                CellState::Closed { flagged: false } => Ok((game.generation(), position)),
                CellState::Closed { flagged: true } => Err("cell is flagged"),
                CellState::Open | CellState::ExposedMine => Err("cell is already open"),
            }
        });
        let (generation, position) = match target {
            Ok(target) => target,
            Err(reason) => return Outcome::Ignored(reason),
        };

        let Some(_claim) = InFlight::claim(&self.reveals, (generation, index)) else {
            return Outcome::Ignored("reveal already in flight");
        };

        match self.engine.reveal(position).await {
            Ok(result) => {
                tracing::debug!(
                    index,
                    opened = result.opened_cells.len(),
                    state = ?result.game_state,
                    "reveal answered"
                );
                self.store.dispatch(GameIntent::Open { generation, result });
                Outcome::Dispatched
            }
            Err(err) => report("reveal", err),
        }
    }

    /// Toggle the flag on a closed cell.
    pub async fn toggle_flag(&self, index: usize) -> Outcome {
        let target = self.store.read(|game| -> Target {
            let position = playable(game, index)?;
            if position.cell.state.is_closed() {
                Ok((game.generation(), position))
            } else {
                Err("cell is already open")
            }
        });
        let (generation, position) = match target {
            Ok(target) => target,
            Err(reason) => return Outcome::Ignored(reason),
        };

        match self.engine.toggle_flag(position).await {
            Ok(result) => match result.position {
                Some(updated) if updated.cell.state.is_closed() => {
                    self.store.dispatch(GameIntent::Flag { generation, result });
                    Outcome::Dispatched
                }
                Some(_) => Outcome::Ignored("cell was opened meanwhile"),
                None => Outcome::Ignored("engine refused the flag"),
            },
            Err(err) => report("flag", err),
        }
    }

    /// Ask for a fresh board. Always allowed.
    pub async fn restart(&self) -> Outcome {
        match self.engine.new_game().await {
            Ok(board) => {
                tracing::info!(cells = board.len(), "new game");
                self.store.dispatch(GameIntent::Restart { board });
                Outcome::Dispatched
            }
            Err(err) => report("restart", err),
        }
    }

    /// Pause the game timer and show the ranked wins.
    pub async fn show_wins(&self) -> Outcome {
        let snapshot = self.store.snapshot();
        if !snapshot.gate.controls_enabled(&snapshot.overlay) {
            return Outcome::Ignored("a dialog is already open");
        }

        if let Err(err) = self.engine.pause_timer().await {
            return report("pause", err);
        }

        match self.engine.win_history().await {
            Ok(history) => {
                self.store
                    .dispatch_overlay(OverlayIntent::ShowWins { history });
                Outcome::Dispatched
            }
            Err(err) => {
                if let Err(resume) = self.engine.resume_timer().await {
                    tracing::error!(error = %resume, "failed to resume timer");
                }
                report("win_history", err)
            }
        }
    }

    /// Close the wins dialog and let the timer run again.
    pub async fn hide_wins(&self) -> Outcome {
        if !self.store.overlay().wins_visible() {
            return Outcome::Ignored("wins are not shown");
        }
        // The dialog stays up until the engine timer runs again.
        match self.engine.resume_timer().await {
            Ok(()) => {
                self.store.dispatch_overlay(OverlayIntent::HideWins);
                Outcome::Dispatched
            }
            Err(err) => report("resume", err),
        }
    }

    pub fn dismiss_end_dialog(&self) -> Outcome {
        let snapshot = self.store.snapshot();
        if !snapshot.gate.end_dialog_visible(&snapshot.overlay) {
            return Outcome::Ignored("no end dialog");
        }
        self.store.dispatch_overlay(OverlayIntent::DismissEndDialog);
        Outcome::Dispatched
    }
}

/// The cell at `index` if the game still takes input.
fn playable(game: &GameClientState, index: usize) -> Result<Position, &'static str> {
    if !game.is_active() {
        return Err("game is over");
    }
    game.position(index).copied().ok_or("no such cell")
}

fn report(command: &'static str, err: EngineError) -> Outcome {
    tracing::error!(command, error = %err, "engine request failed");
    Outcome::Failed(err)
}
