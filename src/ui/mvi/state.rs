//! Base trait for UI state.

/// Marker trait for state values.
///
/// States are replaced, never edited: `Clone` to derive a new one,
/// `PartialEq` so callers can tell whether an intent changed anything,
/// and `Default` so the owner can `mem::take` it into a reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
