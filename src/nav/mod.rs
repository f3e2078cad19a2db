//! Shared navigation state and push-allowance policies.

mod policy;
mod state;

pub use policy::PushPolicy;
pub use state::NavState;
