pub mod dispatcher;
pub mod game;
pub mod gate;
pub mod input;
pub mod mvi;
pub mod overlay;
pub mod render;
pub mod runtime;
pub mod store;
pub mod timer;
