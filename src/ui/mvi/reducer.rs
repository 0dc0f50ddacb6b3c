use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// Must be a pure function: (State, Intent) -> State. Anything time
/// dependent is carried in the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
