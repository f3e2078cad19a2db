//! One node in the recursive push-navigation chain.
//!
//! Split MVI-style: [`NodePhase`] is the pure state, [`NodeIntent`] the
//! actions, [`NodeReducer`] the pure transition function, and
//! [`NodeController`] the side-effectful shell that reports mounts to the
//! shared [`crate::nav::NavState`] and constructs children.

mod binding;
mod controller;
mod intent;
mod reducer;
mod state;

pub use binding::ActiveFlag;
pub use controller::NodeController;
pub use intent::NodeIntent;
pub use reducer::NodeReducer;
pub use state::NodePhase;
