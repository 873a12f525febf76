//! Error types for sched-tuner operations.
//!
//! Defines error types for the major subsystems:
//! - Engine operations (reconfigure, start, pause, destroy)
//! - Privileged host-field overrides and lifecycle transitions
//! - Thread-group teardown

use thiserror::Error;

/// Errors that can occur during engine operations.
///
/// None of these escape the engine's public surface: every mutating
/// operation converts them into an `OperationResult` with a descriptive
/// message.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid worker thread count {0}: must be between 1 and 16")]
    InvalidParameter(i32),

    #[error("Failed to replace the host scheduler configuration: {0}")]
    ReconfigurationFailed(String),

    #[error("The scheduler has not been reconfigured successfully")]
    NotReconfigured,

    #[error("Host scheduler rejected the lifecycle transition: {0}")]
    HostTransitionFailed(String),

    #[error("Thread group '{0}' not found among live groups")]
    GroupNotFound(String),
}

/// Errors raised by a [`SchedulerHost`](crate::host::SchedulerHost)
/// implementation.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host offers no hook for overriding the requested internal field.
    #[error("Host does not support overriding internal field '{field}'")]
    OverrideUnsupported { field: String },

    /// The override hook exists but the write failed.
    #[error("Override of host field '{field}' failed: {reason}")]
    OverrideFailed { field: String, reason: String },

    /// The host refused or failed a start/standby request.
    #[error("Lifecycle transition failed: {0}")]
    TransitionFailed(String),

    /// The active configuration could not be read back.
    #[error("Failed to read the active host configuration: {0}")]
    ConfigUnavailable(String),
}

/// Errors raised during thread-group teardown.
#[derive(Debug, Error)]
pub enum GroupError {
    /// A single worker thread could not be forcibly terminated.
    #[error("Failed to terminate thread '{thread}': {reason}")]
    TerminateFailed { thread: String, reason: String },

    /// The group object itself could not be released.
    #[error("Failed to release thread group '{group}': {reason}")]
    ReleaseFailed { group: String, reason: String },
}
