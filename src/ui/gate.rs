//! Input and dialog gating derived from the game lifecycle.

use crate::lifecycle::GameState;
use crate::ui::game::GameClientState;
use crate::ui::overlay::OverlayState;

/// What the view may do right now. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleGate {
    pub lifecycle: GameState,
    /// The game has not ended.
    pub active: bool,
    /// Reveal and flag gestures reach the dispatcher.
    pub input_accepted: bool,
    /// Win or loss presentation is due. Stays set until the next restart.
    pub show_end_dialog: bool,
}

impl LifecycleGate {
    pub fn from_lifecycle(lifecycle: GameState) -> Self {
        let active = lifecycle.is_active();
        Self {
            lifecycle,
            active,
            input_accepted: active,
            show_end_dialog: lifecycle.is_over(),
        }
    }

    pub fn derive(game: &GameClientState) -> Self {
        Self::from_lifecycle(game.lifecycle())
    }

    /// End dialog on screen: due and not yet closed by the player.
    pub fn end_dialog_visible(&self, overlay: &OverlayState) -> bool {
        self.show_end_dialog && !overlay.end_dialog_dismissed
    }

    /// New Game and Top Scores are disabled while any dialog is open.
    pub fn controls_enabled(&self, overlay: &OverlayState) -> bool {
        !self.end_dialog_visible(overlay) && !overlay.wins_visible()
    }

    pub fn end_message(&self) -> Option<&'static str> {
        match self.lifecycle {
            GameState::Win => Some("You Won!"),
            GameState::Loss => Some("You Lose!"),
            GameState::New | GameState::Active => None,
        }
    }
}
