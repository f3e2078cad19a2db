//! Tests for the pure node lifecycle reducer.

mod common;

use navchain::mvi::Reducer;
use navchain::node::{NodeIntent, NodePhase, NodeReducer};

fn mounted(child_active: bool, counter: u64) -> NodePhase {
    NodePhase::Mounted {
        child_active,
        counter,
    }
}

#[test]
fn mount_from_unmounted() {
    let state = NodeReducer::reduce(NodePhase::Unmounted, NodeIntent::Mount);
    assert_eq!(state, mounted(false, 0));
}

#[test]
fn mount_while_mounted_is_inert() {
    let state = NodeReducer::reduce(mounted(true, 3), NodeIntent::Mount);
    assert_eq!(state, mounted(true, 3));
}

#[test]
fn allowed_push_activates_child() {
    let state = NodeReducer::reduce(mounted(false, 1), NodeIntent::PushChild { allowed: true });
    assert_eq!(state, mounted(true, 1));
}

#[test]
fn denied_push_is_inert() {
    let state = NodeReducer::reduce(mounted(false, 1), NodeIntent::PushChild { allowed: false });
    assert_eq!(state, mounted(false, 1));
}

#[test]
fn push_with_child_already_active_is_inert() {
    let state = NodeReducer::reduce(mounted(true, 0), NodeIntent::PushChild { allowed: true });
    assert_eq!(state, mounted(true, 0));
}

#[test]
fn push_while_unmounted_is_inert() {
    let state = NodeReducer::reduce(NodePhase::Unmounted, NodeIntent::PushChild { allowed: true });
    assert_eq!(state, NodePhase::Unmounted);
}

#[test]
fn pop_child_deactivates() {
    let state = NodeReducer::reduce(mounted(true, 2), NodeIntent::PopChild);
    assert_eq!(state, mounted(false, 2));
}

#[test]
fn pop_child_without_active_child_is_inert() {
    let state = NodeReducer::reduce(mounted(false, 2), NodeIntent::PopChild);
    assert_eq!(state, mounted(false, 2));
    let state = NodeReducer::reduce(NodePhase::Unmounted, NodeIntent::PopChild);
    assert_eq!(state, NodePhase::Unmounted);
}

#[test]
fn increment_counter_preserves_child_flag() {
    let state = NodeReducer::reduce(mounted(true, 0), NodeIntent::IncrementCounter);
    assert_eq!(state, mounted(true, 1));
    let state = NodeReducer::reduce(state, NodeIntent::IncrementCounter);
    assert_eq!(state, mounted(true, 2));
}

#[test]
fn increment_counter_while_unmounted_is_inert() {
    let state = NodeReducer::reduce(NodePhase::Unmounted, NodeIntent::IncrementCounter);
    assert_eq!(state, NodePhase::Unmounted);
}

#[test]
fn unmount_from_any_phase() {
    for start in [NodePhase::Unmounted, mounted(false, 1), mounted(true, 7)] {
        let state = NodeReducer::reduce(start, NodeIntent::Unmount);
        assert_eq!(state, NodePhase::Unmounted);
    }
}
