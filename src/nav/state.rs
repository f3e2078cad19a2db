//! Shared navigation depth accounting.
//!
//! Provides the single source of truth for how many nodes are currently
//! mounted at each depth, plus the configured recursion ceiling. One
//! instance is shared by reference across every node controller.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::config::Config;

/// Thread-safe navigation state with shared ownership.
///
/// Cloning the handle shares the underlying state. Reads are concurrent;
/// mutations take the write lock, so the count invariant (all counts >= 0)
/// holds even on multi-threaded hosts.
#[derive(Clone)]
pub struct NavState {
    inner: Arc<RwLock<NavStateInner>>,
}

struct NavStateInner {
    /// Recursion ceiling. Set once from configuration, never mutated here.
    max_depth: u32,
    /// Currently-mounted node count per depth. Keys are created lazily and
    /// kept once created, so a fully popped depth reads as `d:0`.
    active_counts: BTreeMap<u32, u32>,
    /// Push history, when tracking is enabled. Append-only: pops do not
    /// remove entries, so this records every push ever made rather than
    /// the current path.
    nav_stack: Option<Vec<u32>>,
}

impl NavState {
    /// Create navigation state with the given ceiling.
    pub fn new(max_depth: u32, track_stack: bool) -> Self {
        let inner = NavStateInner {
            max_depth,
            active_counts: BTreeMap::new(),
            nav_stack: track_stack.then(Vec::new),
        };
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Create navigation state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.navigation.max_depth, config.navigation.track_stack)
    }

    /// Record that a node mounted at `depth`.
    pub fn record_mount(&self, depth: u32) {
        let mut state = self.inner.write().expect("nav state lock poisoned");
        let count = state.active_counts.entry(depth).or_insert(0);
        *count += 1;
        tracing::debug!(depth, count = *count, "Node mounted");
    }

    /// Record that a node unmounted at `depth`.
    ///
    /// # Panics
    /// Panics if no node is mounted at `depth`. An unmount without a
    /// matching mount is a lifecycle-pairing bug in the host, not a
    /// runtime condition to recover from.
    pub fn record_unmount(&self, depth: u32) {
        let mut state = self.inner.write().expect("nav state lock poisoned");
        let count = state
            .active_counts
            .get_mut(&depth)
            .filter(|c| **c > 0)
            .unwrap_or_else(|| panic!("unmount at depth {depth} without a matching mount"));
        *count -= 1;
        tracing::debug!(depth, count = *count, "Node unmounted");
    }

    /// Record a push to `depth` in the navigation stack.
    ///
    /// No-op when stack tracking is disabled. There is no removal
    /// counterpart; see the `nav_stack` field notes.
    pub fn record_push(&self, depth: u32) {
        let mut state = self.inner.write().expect("nav state lock poisoned");
        if let Some(stack) = state.nav_stack.as_mut() {
            stack.push(depth);
            tracing::debug!(depth, len = stack.len(), "Push recorded");
        }
    }

    /// Total number of currently mounted nodes across all depths.
    pub fn total_active(&self) -> u32 {
        let state = self.inner.read().expect("nav state lock poisoned");
        state.active_counts.values().sum()
    }

    /// Number of currently mounted nodes at `depth`.
    pub fn depth_count(&self, depth: u32) -> u32 {
        let state = self.inner.read().expect("nav state lock poisoned");
        state.active_counts.get(&depth).copied().unwrap_or(0)
    }

    /// The configured recursion ceiling.
    pub fn max_depth(&self) -> u32 {
        self.inner.read().expect("nav state lock poisoned").max_depth
    }

    /// Snapshot of the push history, or `None` when tracking is disabled.
    pub fn nav_stack(&self) -> Option<Vec<u32>> {
        let state = self.inner.read().expect("nav state lock poisoned");
        state.nav_stack.clone()
    }

    /// Deterministic depth-sorted rendering of the active counts, for
    /// diagnostics: `[0:1,1:1,2:1]`. Never used for decision logic.
    pub fn describe(&self) -> String {
        let state = self.inner.read().expect("nav state lock poisoned");
        let entries: Vec<String> = state
            .active_counts
            .iter()
            .map(|(depth, count)| format!("{depth}:{count}"))
            .collect();
        format!("[{}]", entries.join(","))
    }
}
