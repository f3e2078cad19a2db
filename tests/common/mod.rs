//! Shared test helpers.

#![allow(dead_code)]

use navchain::nav::{NavState, PushPolicy};
use navchain::node::NodeController;

/// Navigation state with the given ceiling and no stack tracking.
pub fn nav(max_depth: u32) -> NavState {
    NavState::new(max_depth, false)
}

/// A root controller that the host has already mounted.
pub fn mounted_root(nav: &NavState, policy: PushPolicy) -> NodeController {
    let mut root = NodeController::root(nav.clone(), policy);
    root.on_mount();
    root
}

/// Push and mount nodes below `root` until the chain holds `len`
/// controllers (root included) or a push is denied.
pub fn mount_chain(root: NodeController, len: usize) -> Vec<NodeController> {
    let mut chain = vec![root];
    while chain.len() < len {
        match chain.last_mut().and_then(|parent| parent.push_child()) {
            Some(mut child) => {
                child.on_mount();
                chain.push(child);
            }
            None => break,
        }
    }
    chain
}
