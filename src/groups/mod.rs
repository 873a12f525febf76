//! Thread-group tracking: names, lifecycle states, and the live-group
//! directory boundary.
//!
//! - **name**: group-name synthesis and the display-name string contract
//! - **registry**: concurrent, advisory map of group name to lifecycle state
//! - **directory**: boundary traits over the live process's thread groups

pub mod directory;
pub mod name;
pub mod registry;

pub use directory::{GroupDirectory, GroupHandle, ThreadHandle};
pub use name::{compose_display_name, group_name, parse_group_name};
pub use name::{DEFAULT_GROUP_NAME, GROUP_NAME_PREFIX};
pub use registry::GroupRegistry;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a tracked thread group.
///
/// `Destroyed` records that teardown was attempted; the host gives no
/// reliable confirmation the group is actually gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupState {
    /// Requested but not yet confirmed running.
    Pending,
    /// Confirmed active.
    Started,
    /// Scheduler placed in standby while the group still exists.
    Paused,
    /// Forceful teardown attempted.
    Destroyed,
}

impl GroupState {
    /// Display label used in composed group names.
    pub fn label(&self) -> &'static str {
        match self {
            GroupState::Pending => "Pending",
            GroupState::Started => "Started",
            GroupState::Paused => "Paused",
            GroupState::Destroyed => "Destroyed",
        }
    }
}

impl std::fmt::Display for GroupState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
