//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Turns a state and an intent into the next state.
///
/// Reducers are the only place where state transitions happen and
/// must stay pure: no I/O, no logging, no hidden inputs. An intent that
/// does not apply returns the state unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
