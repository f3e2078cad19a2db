//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is anything that can change a node's state: a user gesture
/// (push, pop, counter tap) or a host lifecycle event (mount, unmount).
/// Reducers consume intents and produce new states.
pub trait Intent: Send + 'static {}
