//! Reducer trait.

use super::intent::Intent;
use super::state::State;

/// Transforms state in response to intents.
///
/// All state transitions funnel through `reduce`, which must be pure:
/// `(State, Intent) -> State`, no side effects. An intent that is not
/// applicable in the current state returns that state unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Apply an intent and return the resulting state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
