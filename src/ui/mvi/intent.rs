//! Base trait for intents.

/// Marker trait for intent values.
///
/// An intent describes what the user asked for (a cell was activated,
/// a history entry was picked). It carries no behavior; the matching
/// reducer decides what, if anything, changes.
pub trait Intent: Send + 'static {}
