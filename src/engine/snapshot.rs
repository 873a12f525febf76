//! Read-only view of the engine and host scheduler state.

use serde::{Deserialize, Serialize};

/// Point-in-time view of the current configuration, as reported to
/// operators.
///
/// Derives `Eq` so façades can diff successive polls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    /// Worker-thread count that the next configuration swap will target.
    pub extra_threads_to_configure: u32,
    /// Configured count when the current extra group is live and tracked as
    /// non-destroyed; 0 otherwise.
    pub extra_threads_running: u32,
    /// Display name of the current group, composed as `"<name>: <state>"`,
    /// or a "not started" placeholder while still on the default group.
    pub thread_group_name: String,
    /// Whether the current group exists and is not the default group.
    pub extra_thread_group_started: bool,
    /// Name of the host's original thread group.
    pub default_thread_group: String,
    /// Whether the host scheduler currently reports STARTED.
    pub scheduler_running: bool,
    /// Whether the configuration reference has been swapped successfully at
    /// least once.
    pub scheduler_reconfigured: bool,
}
