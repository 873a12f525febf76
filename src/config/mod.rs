//! Scheduler configuration values and their resolution from host settings.
//!
//! This module provides:
//! - **SchedulerConfig**: the immutable configuration value handed to the
//!   host scheduler on a swap
//! - **ConfigProvider**: resolves the desired worker-thread count, default
//!   time zone, and cluster membership from host-wide settings

pub mod provider;

pub use provider::ConfigProvider;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Refresh interval for clustered job bookkeeping, in minutes.
pub const CLUSTERED_REFRESH_INTERVAL_MINUTES: u32 = 5;

/// Configuration value supplied to the host scheduler.
///
/// Immutable once constructed; a fresh value is built from settings for each
/// configuration swap rather than cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Number of worker threads the scheduler should run.
    pub worker_thread_count: u32,
    /// Default time zone for schedule evaluation, if configured.
    pub default_time_zone: Option<Tz>,
    /// Clustered-job refresh interval; 0 when the node is not clustered.
    pub clustered_refresh_interval_minutes: u32,
    /// Capability flag the host scheduler requires enabled.
    pub use_job_data_migration: bool,
    /// Capability flag the host scheduler requires disabled.
    pub use_fine_grained_schedules: bool,
}

impl SchedulerConfig {
    /// Creates a configuration with the host's fixed capability flags.
    pub fn new(
        worker_thread_count: u32,
        default_time_zone: Option<Tz>,
        clustered_refresh_interval_minutes: u32,
    ) -> Self {
        Self {
            worker_thread_count,
            default_time_zone,
            clustered_refresh_interval_minutes,
            use_job_data_migration: true,
            use_fine_grained_schedules: false,
        }
    }
}
