//! Dialogs over the board: win history and end-of-game dismissal.

mod intent;
mod reducer;
mod state;

pub use intent::OverlayIntent;
pub use reducer::OverlayReducer;
pub use state::{OverlayState, WinsDialog};
