use crate::mvi::Reducer;
use crate::node::intent::NodeIntent;
use crate::node::state::NodePhase;

/// Pure transition function for a node's lifecycle.
///
/// Intents that don't apply in the current phase are inert: the phase is
/// returned unchanged rather than signalling an error, matching how the
/// host disables rather than rejects unavailable actions.
pub struct NodeReducer;

impl Reducer for NodeReducer {
    type State = NodePhase;
    type Intent = NodeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NodeIntent::Mount => match state {
                NodePhase::Unmounted => NodePhase::Mounted {
                    child_active: false,
                    counter: 0,
                },
                mounted => mounted,
            },
            NodeIntent::PushChild { allowed } => match state {
                NodePhase::Mounted {
                    child_active: false,
                    counter,
                } if allowed => NodePhase::Mounted {
                    child_active: true,
                    counter,
                },
                other => other,
            },
            NodeIntent::PopChild => match state {
                NodePhase::Mounted {
                    child_active: true,
                    counter,
                } => NodePhase::Mounted {
                    child_active: false,
                    counter,
                },
                other => other,
            },
            NodeIntent::IncrementCounter => match state {
                NodePhase::Mounted {
                    child_active,
                    counter,
                } => NodePhase::Mounted {
                    child_active,
                    counter: counter + 1,
                },
                unmounted => unmounted,
            },
            NodeIntent::Unmount => NodePhase::Unmounted,
        }
    }
}
