use crate::engine::WinHistory;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum OverlayIntent {
    /// Win history arrived from the engine.
    ShowWins { history: WinHistory },
    HideWins,
    /// Player closed the end-of-game dialog.
    DismissEndDialog,
    /// A new board was issued.
    Reset,
}

impl Intent for OverlayIntent {}
