//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current state and one intent.
///
/// Implementations are total: every intent is valid in every state, and an
/// intent that does not apply returns the state unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
