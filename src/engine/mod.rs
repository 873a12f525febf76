//! Thread-group lifecycle state machine and reconfiguration engine.
//!
//! The engine owns three pieces of process-lifetime state: whether the
//! host's configuration reference has been swapped successfully at least
//! once, the ordinal of the most recently spawned thread group, and an
//! advisory registry of group lifecycle states. Every mutating operation
//! returns an [`OperationResult`]; no failure propagates past the public
//! surface.
//!
//! # Typical operator sequence
//!
//! 1. [`set_thread_count`](ReconfigurationEngine::set_thread_count) to pick
//!    the target pool size
//! 2. [`reconfigure`](ReconfigurationEngine::reconfigure) to swap the host's
//!    configuration reference
//! 3. [`pause`](ReconfigurationEngine::pause) to put the host in standby
//! 4. [`start_with_new_group`](ReconfigurationEngine::start_with_new_group)
//!    to spin up the larger pool under a fresh group name
//!
//! Destroying groups is best-effort and explicitly unsafe: the host offers
//! no cooperative cancellation for its worker threads, so teardown may leave
//! the host unstable. The engine bounds that risk (one extra group per
//! start, explicit state labels) rather than eliminating it.

pub mod result;
pub mod snapshot;

pub use result::OperationResult;
pub use snapshot::ConfigSnapshot;

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::config::{ConfigProvider, SchedulerConfig};
use crate::error::{EngineError, HostError};
use crate::groups::{
    compose_display_name, group_name, parse_group_name, GroupDirectory, GroupRegistry, GroupState,
    DEFAULT_GROUP_NAME,
};
use crate::host::{HostState, SchedulerHost};
use crate::settings::{ClusterIdentity, SettingsStore, SCHEDULER_THREADS_KEY};

/// Inclusive bounds for an acceptable worker-thread count.
const MIN_THREAD_COUNT: i32 = 1;
const MAX_THREAD_COUNT: i32 = 16;

/// Placeholder display name while still on the default group.
const NOT_STARTED_PLACEHOLDER: &str = "Extra thread group not started";

/// Drives live reconfiguration of the host scheduler's worker-thread pool.
///
/// Constructed once by the process's composition root and shared across
/// operator-facing call paths. Safe to invoke concurrently; the
/// standby/latch/start sequence is serialized by an internal lock.
pub struct ReconfigurationEngine {
    host: Arc<dyn SchedulerHost>,
    directory: Arc<dyn GroupDirectory>,
    settings: Arc<dyn SettingsStore>,
    provider: ConfigProvider,
    registry: GroupRegistry,
    /// Whether the host's configuration reference has been swapped
    /// successfully at least once.
    reconfigured: AtomicBool,
    /// Ordinal of the current thread group; 1 is the host's default group.
    ordinal: AtomicU32,
    /// Serializes the standby, clear-latch, start sequence.
    transition_lock: Mutex<()>,
}

impl ReconfigurationEngine {
    /// Creates an engine over the given host, group directory, and settings
    /// boundaries.
    pub fn new(
        host: Arc<dyn SchedulerHost>,
        directory: Arc<dyn GroupDirectory>,
        settings: Arc<dyn SettingsStore>,
        cluster: Arc<dyn ClusterIdentity>,
    ) -> Self {
        let provider = ConfigProvider::new(Arc::clone(&settings), cluster);
        Self {
            host,
            directory,
            settings,
            provider,
            registry: GroupRegistry::new(),
            reconfigured: AtomicBool::new(false),
            ordinal: AtomicU32::new(1),
            transition_lock: Mutex::new(()),
        }
    }

    /// Persists the desired worker-thread count to host settings.
    ///
    /// Valid range is 1..=16 inclusive. This only affects the next
    /// configuration swap, never a running scheduler.
    pub fn set_thread_count(&self, count: i32) -> OperationResult {
        if !(MIN_THREAD_COUNT..=MAX_THREAD_COUNT).contains(&count) {
            warn!(count, "Rejected worker thread count");
            return OperationResult::fail(EngineError::InvalidParameter(count).to_string());
        }
        self.settings
            .set_string(SCHEDULER_THREADS_KEY, &count.to_string());
        OperationResult::ok(format!("Worker thread count set to {count}"))
    }

    /// Builds a fresh configuration and swaps it into the host.
    ///
    /// On success the engine records the current group as Pending and sets
    /// the reconfigured flag. On failure all state is left unchanged.
    /// Idempotent in effect: repeated calls re-swap to an equivalent
    /// configuration.
    pub fn reconfigure(&self) -> OperationResult {
        debug!("Re-configuring the host scheduler");
        let config = self.provider.build();
        match self.override_host_configuration(config) {
            Ok(()) => {
                self.reconfigured.store(true, Ordering::SeqCst);
                let name = self.current_group_name();
                self.registry.mark(&name, GroupState::Pending);
                debug!(group = %name, "Scheduler re-configured successfully");
                OperationResult::ok("Scheduler reconfigured: true")
            }
            Err(e) => {
                error!(error = %e, "Error re-configuring the host scheduler");
                OperationResult::fail(
                    EngineError::ReconfigurationFailed(e.to_string()).to_string(),
                )
            }
        }
    }

    /// Pauses the host scheduler.
    ///
    /// Best-effort: always reports success, because the caller has no
    /// actionable recovery and pausing is a precondition for destroy.
    pub fn pause(&self) -> OperationResult {
        if self.host.state() == HostState::Started {
            debug!("Pausing the host scheduler");
            match self.host.standby() {
                Ok(()) => {
                    let name = self.current_group_name();
                    if self.directory.is_live(&name) {
                        self.registry.mark(&name, GroupState::Paused);
                    }
                }
                Err(e) => {
                    error!(error = %e, "Error pausing the host scheduler");
                }
            }
        }
        OperationResult::ok("Scheduler paused")
    }

    /// Starts the host scheduler, resuming the default group and any extra
    /// groups already spawned.
    ///
    /// When the engine has reconfigured successfully but the current extra
    /// group is not yet confirmed running, the host's started-latch is
    /// cleared first so its startup path re-evaluates the swapped
    /// configuration.
    pub fn start(&self) -> OperationResult {
        if self.host.state() == HostState::Standby {
            let name = self.current_group_name();
            if self.is_reconfigured() && !self.directory.is_live(&name) {
                if let Err(e) = self.clear_started_latch() {
                    error!(error = %e, "Error clearing the host started latch");
                }
            }
            debug!("Starting the host scheduler");
            if let Err(e) = self.host.start() {
                error!(error = %e, "Error starting the host scheduler");
                return OperationResult::fail(
                    EngineError::HostTransitionFailed(e.to_string()).to_string(),
                );
            }
            if self.directory.is_live(&name) {
                self.registry.mark(&name, GroupState::Started);
            }
        }
        OperationResult::ok("Scheduler started")
    }

    /// Starts the host scheduler with one more extra thread group.
    ///
    /// Requires a prior successful [`reconfigure`](Self::reconfigure). The
    /// standby, clear-latch, start sequence runs under the engine's
    /// transition lock, so concurrent callers each get a distinct ordinal
    /// and a serialized host transition. Ordinals are never reused, to
    /// avoid name collisions with groups still alive from a previous cycle.
    pub fn start_with_new_group(&self) -> OperationResult {
        if !self.is_reconfigured() {
            info!("The scheduler has not been reconfigured successfully");
            return OperationResult::fail(EngineError::NotReconfigured.to_string());
        }

        let _guard = self.transition_lock.lock();

        if let Err(e) = self.host.standby() {
            error!(error = %e, "Error forcing the host scheduler to standby");
            return OperationResult::fail(
                EngineError::HostTransitionFailed(e.to_string()).to_string(),
            );
        }
        if let Err(e) = self.clear_started_latch() {
            error!(error = %e, "Error clearing the host started latch");
            return OperationResult::fail(
                EngineError::ReconfigurationFailed(e.to_string()).to_string(),
            );
        }

        let ordinal = self.ordinal.fetch_add(1, Ordering::SeqCst) + 1;
        let name = group_name(ordinal);
        debug!(group = %name, "Starting the host scheduler with an extra thread group");

        if let Err(e) = self.host.start() {
            error!(error = %e, "Error starting the host scheduler");
            return OperationResult::fail(
                EngineError::HostTransitionFailed(e.to_string()).to_string(),
            );
        }

        if self.directory.is_live(&name) {
            self.registry.mark(&name, GroupState::Started);
        } else {
            self.registry.mark(&name, GroupState::Pending);
        }

        OperationResult::ok(format!("Scheduler started with thread group '{name}'"))
    }

    /// Attempts to destroy a thread group by name.
    ///
    /// Unsafe and best-effort: worker threads have no cooperative
    /// cancellation, so each one is terminated abruptly, failures logged
    /// and skipped. The host may become unstable afterwards. The scheduler
    /// is paused first; `name` may be a state-annotated display name from a
    /// prior status query.
    pub fn destroy_group(&self, name: &str) -> OperationResult {
        debug!(group = %name, "Destroying scheduler thread group");
        self.pause();

        let bare = parse_group_name(name);
        if !self.is_reconfigured() {
            warn!(
                group = %bare,
                "Cannot destroy the thread group: the scheduler has not been re-configured"
            );
            return OperationResult::fail(EngineError::NotReconfigured.to_string());
        }

        let Some(group) = self
            .directory
            .find_by_name(bare)
            .filter(|group| group.active_count() > 0)
        else {
            warn!(group = %bare, "Cannot destroy the thread group: not found among live groups");
            return OperationResult::fail(EngineError::GroupNotFound(bare.to_string()).to_string());
        };

        self.registry.mark(bare, GroupState::Destroyed);

        for thread in group.threads() {
            if let Err(e) = thread.terminate() {
                error!(error = %e, thread = %thread.name(), "Error terminating worker thread");
            }
        }
        if let Err(e) = group.release() {
            error!(error = %e, group = %bare, "Error releasing the thread group");
        }

        debug!(group = %bare, "Thread group destruction attempted");
        OperationResult::ok(format!(
            "Destruction of thread group '{bare}' attempted; the host gives no confirmation it is gone"
        ))
    }

    /// Sweeps every extra thread group spawned so far, in ascending ordinal
    /// order. Ordinal 1 is the default group and is never targeted.
    ///
    /// Best-effort: reports overall success regardless of individual
    /// failures.
    pub fn destroy_all_extra_groups(&self) -> OperationResult {
        let current = self.current_ordinal();
        for ordinal in 2..=current {
            let name = group_name(ordinal);
            let result = self.destroy_group(&name);
            debug!(group = %name, success = result.success, "Extra thread group sweep step");
        }
        OperationResult::ok("Destruction of all extra thread groups attempted")
    }

    /// Returns a read-only snapshot of the engine and host state.
    pub fn snapshot(&self) -> ConfigSnapshot {
        let name = self.current_group_name();
        let target = self.provider.worker_thread_count();
        let reconfigured = self.is_reconfigured();
        let live = self.directory.is_live(&name);
        let on_default = name == DEFAULT_GROUP_NAME;
        let destroyed = self.registry.state_of(&name) == Some(GroupState::Destroyed);

        let extra_threads_running = if reconfigured && live && !on_default && !destroyed {
            target
        } else {
            0
        };
        let display_name = if on_default {
            NOT_STARTED_PLACEHOLDER.to_string()
        } else {
            let state = self.registry.state_of(&name).unwrap_or(GroupState::Pending);
            compose_display_name(&name, state)
        };

        ConfigSnapshot {
            extra_threads_to_configure: target,
            extra_threads_running,
            thread_group_name: display_name,
            extra_thread_group_started: live && !on_default,
            default_thread_group: DEFAULT_GROUP_NAME.to_string(),
            scheduler_running: self.host.state() == HostState::Started,
            scheduler_reconfigured: reconfigured,
        }
    }

    /// Renders the host's active configuration for operators.
    ///
    /// Returns `None` when the configuration cannot be read or rendered;
    /// the error is logged.
    pub fn host_config_dump(&self) -> Option<String> {
        match self.host.active_configuration() {
            Ok(config) => match serde_json::to_string(&config) {
                Ok(json) => Some(json),
                Err(e) => {
                    error!(error = %e, "Error rendering the host scheduler configuration");
                    None
                }
            },
            Err(e) => {
                error!(error = %e, "Error reading the host scheduler configuration");
                None
            }
        }
    }

    /// Whether the host's configuration reference has been swapped
    /// successfully at least once.
    pub fn is_reconfigured(&self) -> bool {
        self.reconfigured.load(Ordering::SeqCst)
    }

    /// Ordinal of the current thread group.
    pub fn current_ordinal(&self) -> u32 {
        self.ordinal.load(Ordering::SeqCst)
    }

    /// Name of the current thread group.
    pub fn current_group_name(&self) -> String {
        group_name(self.current_ordinal())
    }

    /// Advisory registry of tracked group states.
    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    // The privileged writes below are the deliberately fragile seam of the
    // whole system: kept in two narrow functions so they can be swapped for
    // a cooperating host API if one ever appears.

    fn override_host_configuration(&self, config: SchedulerConfig) -> Result<(), HostError> {
        self.host.override_configuration(config)
    }

    fn clear_started_latch(&self) -> Result<(), HostError> {
        self.host.override_started_latch(false)
    }
}
