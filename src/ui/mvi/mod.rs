//! Model-View-Intent primitives.
//!
//! ```text
//! gesture ──→ engine ──→ Intent ──→ Reducer ──→ State ──→ view
//!                           ↑
//!               timer tick ─┘
//! ```
//!
//! - **State**: everything a view needs to draw one frame
//! - **Intent**: an engine response, a timer tick or a local UI action
//! - **Reducer**: the only place state changes, `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
