use serde::{Deserialize, Serialize};

use crate::nav::PushPolicy;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: Navigation,
}

/// Navigation core settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigation {
    /// Recursion ceiling consulted by the push policy (default: 5).
    ///
    /// Read once when the shared navigation state is built; the core
    /// never mutates it afterwards.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Which push-allowance strategy gates child creation (default: depth_bound).
    #[serde(default)]
    pub policy: PushPolicy,
    /// When true, every push is appended to a navigation stack for
    /// diagnostics (default: false).
    #[serde(default)]
    pub track_stack: bool,
}

fn default_max_depth() -> u32 {
    5
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            policy: PushPolicy::default(),
            track_stack: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navigation: Navigation::default(),
        }
    }
}
