use crate::ui::mvi::Reducer;

use super::intent::OverlayIntent;
use super::state::{OverlayState, WinsDialog};

pub struct OverlayReducer;

impl Reducer for OverlayReducer {
    type State = OverlayState;
    type Intent = OverlayIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OverlayIntent::ShowWins { history } => OverlayState {
                wins: WinsDialog::Visible { history },
                ..state
            },
            OverlayIntent::HideWins => OverlayState {
                wins: WinsDialog::Hidden,
                ..state
            },
            OverlayIntent::DismissEndDialog => OverlayState {
                end_dialog_dismissed: true,
                ..state
            },
            // The wins dialog is independent of the board and survives.
            OverlayIntent::Reset => OverlayState {
                end_dialog_dismissed: false,
                ..state
            },
        }
    }
}
