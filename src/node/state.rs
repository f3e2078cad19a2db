use crate::mvi::State;

/// Lifecycle state of a single node.
///
/// A node cycles `Unmounted -> Mounted(child inactive) <-> Mounted(child
/// active) -> Unmounted`. The counter is a purely local demonstration
/// value with no cross-node effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodePhase {
    #[default]
    Unmounted,
    Mounted {
        child_active: bool,
        counter: u64,
    },
}

impl State for NodePhase {}

impl NodePhase {
    pub fn is_mounted(&self) -> bool {
        !matches!(self, Self::Unmounted)
    }

    pub fn is_child_active(&self) -> bool {
        matches!(
            self,
            Self::Mounted {
                child_active: true,
                ..
            }
        )
    }

    pub fn counter(&self) -> u64 {
        match self {
            Self::Mounted { counter, .. } => *counter,
            Self::Unmounted => 0,
        }
    }
}
