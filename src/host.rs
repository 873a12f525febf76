//! Boundary to the host's running scheduler service.
//!
//! The engine drives the host through this trait: observable lifecycle
//! state, start/standby requests, and two privileged hooks that override
//! fields the host normally write-protects after its own construction.
//!
//! The override hooks are the one deliberately fragile seam in the system.
//! They exist because the host offers no supported API for changing its
//! worker pool after startup. Implementations that cannot reach the fields
//! must fail loudly with [`HostError::OverrideUnsupported`] rather than
//! pretend the write happened; if the host ever grows a cooperating
//! extension point, only implementations of this trait need to change.

use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::error::HostError;

/// Externally observable lifecycle state of the host scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostState {
    /// Dispatching job executions.
    Started,
    /// Paused; no new job executions are dispatched.
    Standby,
    /// Not yet started, or in an unrecognized internal state.
    Other,
}

/// The host's running job-scheduling service.
///
/// All methods are synchronous; none are cancellable once started.
pub trait SchedulerHost: Send + Sync {
    /// Returns the host's current lifecycle state.
    fn state(&self) -> HostState;

    /// Requests a transition to the started state.
    fn start(&self) -> Result<(), HostError>;

    /// Requests a transition to standby.
    fn standby(&self) -> Result<(), HostError>;

    /// Privileged hook: replaces the host's active configuration reference
    /// in place, bypassing its normal write protection.
    fn override_configuration(&self, config: SchedulerConfig) -> Result<(), HostError>;

    /// Privileged hook: overwrites the host's internal "already started"
    /// latch so the next start request re-evaluates the active
    /// configuration.
    fn override_started_latch(&self, started: bool) -> Result<(), HostError>;

    /// Reads back the host's active configuration.
    fn active_configuration(&self) -> Result<SchedulerConfig, HostError>;
}
