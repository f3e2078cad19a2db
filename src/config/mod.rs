//! Configuration loading and types.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Navigation};
