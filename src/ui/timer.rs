//! Feeds the engine's duration ticks into the store.
//!
//! The listener is a scoped resource: mounted with the game view, released
//! when the view goes away. At most one is live per bridge.
//!
//! A subscription is bound to the board generation current at mount. Ticks
//! are stamped with that generation, and a restart seen by the listener
//! discards whatever is still buffered before rebinding.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::engine::{EngineError, GameEngine, TimeEvent};
use crate::ui::game::GameIntent;
use crate::ui::store::GameStore;

/// A live listener. Dropping it stops the listener task.
pub struct TimerSubscription {
    task: JoinHandle<()>,
}

impl TimerSubscription {
    pub fn is_live(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TimerSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct TimerBridge {
    store: GameStore,
    subscription: Option<TimerSubscription>,
}

impl TimerBridge {
    pub fn new(store: GameStore) -> Self {
        Self {
            store,
            subscription: None,
        }
    }

    /// Start listening on `events`, releasing any previous listener first.
    pub fn mount(&mut self, events: mpsc::Receiver<TimeEvent>) {
        self.unmount();
        // Bound here, not in the task, so restarts between mount and the
        // task's first poll are still observed.
        let changes = self.store.subscribe();
        let generation = self.store.generation();
        let task = tokio::spawn(listen(self.store.clone(), changes, generation, events));
        self.subscription = Some(TimerSubscription { task });
    }

    /// Open the engine's duration stream and listen on it.
    pub async fn mount_engine(&mut self, engine: &dyn GameEngine) -> Result<(), EngineError> {
        let events = engine.duration_events().await?;
        self.mount(events);
        Ok(())
    }

    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("timer listener released");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(TimerSubscription::is_live)
    }
}

async fn listen(
    store: GameStore,
    mut changes: watch::Receiver<u64>,
    mut bound: u64,
    mut events: mpsc::Receiver<TimeEvent>,
) {
    loop {
        tokio::select! {
            biased;

            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = store.generation();
                if current != bound {
                    let mut discarded = 0usize;
                    while events.try_recv().is_ok() {
                        discarded += 1;
                    }
                    tracing::debug!(
                        from = bound,
                        to = current,
                        discarded,
                        "timer rebound to new board"
                    );
                    bound = current;
                }
            }

            tick = events.recv() => {
                let Some(mut tick) = tick else {
                    break;
                };
                // Only the latest label matters.
                while let Ok(newer) = events.try_recv() {
                    tick = newer;
                }
                store.dispatch(GameIntent::Duration {
                    generation: bound,
                    value: tick.duration,
                });
            }
        }
    }
    tracing::debug!("duration stream ended");
}
