//! Side-effectful shell around the node state machine.

use crate::nav::{NavState, PushPolicy};
use crate::node::binding::ActiveFlag;
use crate::node::intent::NodeIntent;
use crate::node::reducer::NodeReducer;
use crate::node::state::NodePhase;

use crate::mvi::Reducer;

/// One node in the recursive navigation chain.
///
/// Controllers form a strictly linear parent-owns-child chain (root at
/// depth 0). Each controller holds a clone of the shared [`NavState`] and
/// reports its mount/unmount there exactly once per lifecycle. The host
/// owns presentation and drives the entry points; every disallowed action
/// is inert rather than an error.
pub struct NodeController {
    depth: u32,
    phase: NodePhase,
    nav: NavState,
    policy: PushPolicy,
    /// Shared with the parent: clearing it is how this node pops itself.
    self_active: ActiveFlag,
    /// Shared with the child created by `push_child`.
    child_active: ActiveFlag,
}

impl NodeController {
    /// Create the root controller at depth 0.
    ///
    /// The root's own binding starts (and effectively stays) active; the
    /// root cannot be popped.
    pub fn root(nav: NavState, policy: PushPolicy) -> Self {
        Self::new(0, nav, policy, ActiveFlag::new(true))
    }

    fn new(depth: u32, nav: NavState, policy: PushPolicy, self_active: ActiveFlag) -> Self {
        tracing::debug!(depth, "Node controller created");
        Self {
            depth,
            phase: NodePhase::default(),
            nav,
            policy,
            self_active,
            child_active: ActiveFlag::new(false),
        }
    }

    fn dispatch(&mut self, intent: NodeIntent) {
        self.phase = NodeReducer::reduce(self.phase.clone(), intent);
    }

    /// Host lifecycle: the node appeared.
    ///
    /// Records the mount in the shared state. Repeat calls while mounted
    /// are inert, keeping the side effect exactly-once per lifecycle.
    pub fn on_mount(&mut self) {
        if self.phase.is_mounted() {
            return;
        }
        self.dispatch(NodeIntent::Mount);
        self.nav.record_mount(self.depth);
    }

    /// Host lifecycle: the node disappeared.
    ///
    /// Records the unmount in the shared state. Inert unless mounted.
    /// Does not cascade to children; the host unmounts those itself.
    pub fn on_unmount(&mut self) {
        if !self.phase.is_mounted() {
            return;
        }
        self.dispatch(NodeIntent::Unmount);
        self.nav.record_unmount(self.depth);
    }

    /// Whether a push is currently available: mounted, no child active,
    /// and the configured policy allows it.
    pub fn can_push_child(&self) -> bool {
        self.phase.is_mounted()
            && !self.phase.is_child_active()
            && self.policy.allows_push(self.depth, &self.nav)
    }

    /// Activate a child node at `depth + 1`.
    ///
    /// Returns the child controller for the host to mount, so the child's
    /// mount side effect is only observable after this transition has
    /// completed. Returns `None` when the push is not allowed.
    pub fn push_child(&mut self) -> Option<NodeController> {
        if !self.can_push_child() {
            tracing::debug!(depth = self.depth, "Push denied");
            return None;
        }
        self.dispatch(NodeIntent::PushChild { allowed: true });
        self.child_active.set(true);

        let child_depth = self.depth + 1;
        self.nav.record_push(child_depth);
        tracing::info!(depth = self.depth, child_depth, "Child pushed");
        Some(Self::new(
            child_depth,
            self.nav.clone(),
            self.policy,
            self.child_active.clone(),
        ))
    }

    /// Deactivate this node's child from above. Inert without an active
    /// child. The host unmounts the child afterwards.
    pub fn pop_child(&mut self) {
        if !self.phase.is_child_active() {
            return;
        }
        self.dispatch(NodeIntent::PopChild);
        self.child_active.set(false);
        tracing::info!(depth = self.depth, "Child popped");
    }

    /// Dismiss this node, clearing the binding shared with the parent.
    ///
    /// Guarded no-op at the root: depth 0 cannot be popped.
    pub fn pop_current(&mut self) {
        if self.depth == 0 {
            tracing::debug!("Pop ignored at root");
            return;
        }
        self.self_active.set(false);
        tracing::info!(depth = self.depth, "Popped self");
    }

    /// Fold a child-side dismissal back into this node's phase.
    ///
    /// When the child cleared the shared binding (popped itself), applies
    /// the pop transition and returns true. The host calls this after
    /// processing events to observe write-through from below.
    pub fn reconcile_child(&mut self) -> bool {
        if self.phase.is_child_active() && !self.child_active.get() {
            self.dispatch(NodeIntent::PopChild);
            tracing::debug!(depth = self.depth, "Child dismissed itself");
            return true;
        }
        false
    }

    /// Bump the local demonstration counter.
    pub fn increment_counter(&mut self) {
        self.dispatch(NodeIntent::IncrementCounter);
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn counter(&self) -> u64 {
        self.phase.counter()
    }

    pub fn is_mounted(&self) -> bool {
        self.phase.is_mounted()
    }

    pub fn is_child_active(&self) -> bool {
        self.phase.is_child_active()
    }

    /// The binding shared with the parent, as the parent sees it.
    pub fn is_active(&self) -> bool {
        self.self_active.get()
    }

    pub fn phase(&self) -> &NodePhase {
        &self.phase
    }
}
