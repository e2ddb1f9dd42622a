//! Serialized holder of the client state.
//!
//! Every change goes through [`GameStore::dispatch`] under one lock, so no
//! two reductions interleave no matter which task delivered the intent.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

use crate::ui::game::{GameClientState, GameIntent, GameReducer};
use crate::ui::gate::LifecycleGate;
use crate::ui::mvi::Reducer;
use crate::ui::overlay::{OverlayIntent, OverlayReducer, OverlayState};

/// Take current state, run reducer, store result.
macro_rules! dispatch_mvi {
    ($inner:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $inner.$field = <$reducer>::reduce(std::mem::take(&mut $inner.$field), $intent);
    };
}

/// Copy of everything a view draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub game: GameClientState,
    pub overlay: OverlayState,
    pub gate: LifecycleGate,
}

#[derive(Clone)]
pub struct GameStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    game: GameClientState,
    overlay: OverlayState,
    revision: u64,
    changes: watch::Sender<u64>,
}

impl StoreInner {
    fn bump(&mut self) {
        self.revision += 1;
        // Stored even without receivers; views subscribe on demand.
        self.changes.send_replace(self.revision);
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    pub fn new() -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                game: GameClientState::default(),
                overlay: OverlayState::default(),
                revision: 0,
                changes,
            })),
        }
    }

    pub fn dispatch(&self, intent: GameIntent) {
        let mut inner = self.inner.lock();
        let restart = matches!(intent, GameIntent::Restart { .. });
        dispatch_mvi!(inner, game, GameReducer, intent);
        if restart {
            dispatch_mvi!(inner, overlay, OverlayReducer, OverlayIntent::Reset);
        }
        inner.bump();
    }

    pub fn dispatch_overlay(&self, intent: OverlayIntent) {
        let mut inner = self.inner.lock();
        dispatch_mvi!(inner, overlay, OverlayReducer, intent);
        inner.bump();
    }

    /// Read the current game without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&GameClientState) -> R) -> R {
        f(&self.inner.lock().game)
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock();
        Snapshot {
            game: inner.game.clone(),
            overlay: inner.overlay.clone(),
            gate: LifecycleGate::derive(&inner.game),
        }
    }

    pub fn game(&self) -> GameClientState {
        self.inner.lock().game.clone()
    }

    pub fn overlay(&self) -> OverlayState {
        self.inner.lock().overlay.clone()
    }

    pub fn gate(&self) -> LifecycleGate {
        self.read(LifecycleGate::derive)
    }

    /// Generation of the board currently held.
    pub fn generation(&self) -> u64 {
        self.read(GameClientState::generation)
    }

    /// Receiver notified with a revision number after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.lock().changes.subscribe()
    }
}
