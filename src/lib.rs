//! Client-side state reconciliation for a remote minesweeper engine.
//!
//! The engine owns the rules. This crate keeps a local copy of the board in
//! step with the engine's answers, derives the header counters and the game
//! lifecycle from them, and gates player input accordingly.

pub mod board;
pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod logging;
pub mod ui;
