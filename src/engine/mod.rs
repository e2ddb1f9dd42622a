//! Game engine command surface.
//!
//! The engine owns every rule; the client only sends intents and reads back
//! the cells the engine decided to change.

mod error;
pub mod http;
pub mod sse;
mod types;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::board::Position;

pub use error::EngineError;
pub use http::HttpEngine;
pub use types::{
    format_elapsed, FlagResult, OpenResult, TimeEvent, Win, WinHistory, TIME_EVENT, TOP_WINS,
};

/// Commands understood by the authoritative game engine.
#[async_trait]
pub trait GameEngine: Send + Sync {
    /// Discard the current game and lay out a fresh board.
    async fn new_game(&self) -> Result<Vec<Position>, EngineError>;

    /// Reveal a cell. The result lists every cell the engine opened.
    async fn reveal(&self, position: Position) -> Result<OpenResult, EngineError>;

    /// Toggle the flag on a closed cell.
    async fn toggle_flag(&self, position: Position) -> Result<FlagResult, EngineError>;

    async fn win_history(&self) -> Result<WinHistory, EngineError>;

    /// Freeze the duration stream, e.g. while the win history is shown.
    async fn pause_timer(&self) -> Result<(), EngineError>;

    async fn resume_timer(&self) -> Result<(), EngineError>;

    /// Open the duration tick stream.
    ///
    /// The stream ends when the receiver is dropped or the engine goes away.
    async fn duration_events(&self) -> Result<mpsc::Receiver<TimeEvent>, EngineError>;
}
