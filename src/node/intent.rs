use crate::mvi::Intent;

/// Everything that can happen to a node.
#[derive(Debug, Clone)]
pub enum NodeIntent {
    /// Host mounted the node.
    Mount,
    /// User asked to push a child. `allowed` carries the push policy's
    /// verdict, evaluated by the controller before dispatch; a denied
    /// push leaves the state untouched.
    PushChild { allowed: bool },
    /// The child was dismissed, by the parent or by the child itself.
    PopChild,
    /// User tapped the local demonstration counter.
    IncrementCounter,
    /// Host unmounted the node.
    Unmount,
}

impl Intent for NodeIntent {}
