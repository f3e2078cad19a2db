//! Shared active/inactive flag between a parent and its child.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A two-way active binding, made explicit.
///
/// The parent's "my child is active" flag and the child's "I am active"
/// flag are the same `ActiveFlag`: the child clearing it on dismissal is
/// immediately visible to the parent, with no property aliasing involved.
#[derive(Debug, Clone, Default)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    pub fn new(active: bool) -> Self {
        Self(Arc::new(AtomicBool::new(active)))
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self, active: bool) {
        self.0.store(active, Ordering::SeqCst);
    }
}
