//! Game reconciliation feature module.
//!
//! Merges engine responses and timer ticks into the locally held game.
//!
//! - `state.rs` - board, lifecycle and header counters of one game
//! - `intent.rs` - engine responses, restarts and timer ticks
//! - `reducer.rs` - the transitions, versioned by board generation

mod intent;
mod reducer;
mod state;

pub use intent::GameIntent;
pub use reducer::GameReducer;
pub use state::{zero_duration, GameClientState};
