//! Advisory registry of thread-group lifecycle states.

use dashmap::DashMap;

use super::GroupState;

/// Concurrent map from thread-group name to lifecycle state.
///
/// Advisory bookkeeping only: the source of truth for whether a group
/// exists is the live process group list, reached through
/// [`GroupDirectory`](super::GroupDirectory). Entries are inserted or
/// updated in place and never removed; `Destroyed` is a terminal state
/// value, so the history of attempted destructions stays visible.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    states: DashMap<String, GroupState>,
}

impl GroupRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `state` for `name`, inserting or updating in place.
    pub fn mark(&self, name: &str, state: GroupState) {
        self.states.insert(name.to_string(), state);
    }

    /// Returns the recorded state for `name`, if any.
    pub fn state_of(&self, name: &str) -> Option<GroupState> {
        self.states.get(name).map(|entry| *entry.value())
    }

    /// Returns true when `name` has ever been recorded.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Number of tracked groups, destroyed ones included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when no group has been tracked yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Copies out the current name/state pairs.
    pub fn entries(&self) -> Vec<(String, GroupState)> {
        self.states
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
