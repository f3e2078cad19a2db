//! Model-View-Intent (MVI) primitives for the navigation core.
//!
//! Unidirectional data flow, with the hosting UI standing in for the view:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Host
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The reducer is pure; side effects (mount accounting, child creation)
//! live in the controller layer that dispatches intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
