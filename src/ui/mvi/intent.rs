//! Marker trait for commands fed into a reducer.

/// A closed set of typed commands, one variant per transition.
///
/// Views never mutate state; they produce intents and hand them to the
/// state owner for dispatch.
pub trait Intent: Send + 'static {}
