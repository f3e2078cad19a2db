//! Push-allowance strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::nav::NavState;

/// Strategy deciding whether a node may push a child.
///
/// The two strategies are deliberately separate and configuration-selected;
/// they are not equivalent. `GlobalBudget` can deny a push even at depth 0
/// when other branches hold nodes, which `DepthBound` never does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushPolicy {
    /// Allow a push while the pushing node sits below the ceiling:
    /// `depth < max_depth`. Pure function of the node's own depth.
    #[default]
    DepthBound,
    /// Allow a push while the whole tree stays within one shared budget:
    /// `total_active() < max_depth`. Every mounted node anywhere counts,
    /// regardless of which depth it occupies.
    GlobalBudget,
}

impl PushPolicy {
    /// Whether a node at `depth` may currently push a child.
    pub fn allows_push(self, depth: u32, nav: &NavState) -> bool {
        match self {
            PushPolicy::DepthBound => depth < nav.max_depth(),
            PushPolicy::GlobalBudget => nav.total_active() < nav.max_depth(),
        }
    }
}

impl fmt::Display for PushPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushPolicy::DepthBound => write!(f, "depth_bound"),
            PushPolicy::GlobalBudget => write!(f, "global_budget"),
        }
    }
}

impl FromStr for PushPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth_bound" => Ok(PushPolicy::DepthBound),
            "global_budget" => Ok(PushPolicy::GlobalBudget),
            other => Err(format!(
                "unknown policy '{other}', expected 'depth_bound' or 'global_budget'"
            )),
        }
    }
}
