use super::intent::Intent;
use super::state::UiState;

/// Transforms state from intents.
///
/// `reduce` must not talk to the engine or any other I/O. Logging of dropped
/// input is the one side effect allowed.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
