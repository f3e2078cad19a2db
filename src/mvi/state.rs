//! Base trait for node state.

/// Marker trait for state objects.
///
/// A state value is an immutable snapshot: cloned to evolve, compared
/// with `PartialEq` to detect changes, and self-contained enough for the
/// host to present the node from it alone.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
