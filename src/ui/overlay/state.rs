use crate::engine::WinHistory;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WinsDialog {
    #[default]
    Hidden,
    Visible {
        history: WinHistory,
    },
}

/// Dialogs drawn over the board.
///
/// The end-of-game dialog itself is derived from the game lifecycle; only
/// the player's dismissal is kept here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayState {
    pub wins: WinsDialog,
    pub end_dialog_dismissed: bool,
}

impl UiState for OverlayState {}

impl OverlayState {
    pub fn wins_visible(&self) -> bool {
        matches!(self.wins, WinsDialog::Visible { .. })
    }

    pub fn history(&self) -> Option<&WinHistory> {
        match &self.wins {
            WinsDialog::Visible { history } => Some(history),
            WinsDialog::Hidden => None,
        }
    }
}
