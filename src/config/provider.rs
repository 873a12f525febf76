//! Resolution of scheduler configuration from host-wide settings.

use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::settings::{
    ClusterIdentity, SettingsStore, DEFAULT_THREAD_COUNT, SCHEDULER_THREADS_KEY,
    SCHEDULER_TIMEZONE_KEY,
};

use super::{SchedulerConfig, CLUSTERED_REFRESH_INTERVAL_MINUTES};

/// Resolves the desired scheduler configuration from host settings.
///
/// Every read goes back to the settings store; a malformed value is a
/// recoverable condition that degrades to the default, logged but never
/// surfaced to callers.
pub struct ConfigProvider {
    settings: Arc<dyn SettingsStore>,
    cluster: Arc<dyn ClusterIdentity>,
    /// Last successfully parsed worker-thread count.
    last_count: AtomicU32,
}

impl ConfigProvider {
    /// Creates a provider over the given settings store and cluster identity.
    pub fn new(settings: Arc<dyn SettingsStore>, cluster: Arc<dyn ClusterIdentity>) -> Self {
        Self {
            settings,
            cluster,
            last_count: AtomicU32::new(DEFAULT_THREAD_COUNT),
        }
    }

    /// Resolves the desired worker-thread count.
    ///
    /// Returns [`DEFAULT_THREAD_COUNT`] when the setting is absent or does
    /// not parse as a positive integer.
    pub fn worker_thread_count(&self) -> u32 {
        match self.settings.get_string(SCHEDULER_THREADS_KEY) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(count) if count > 0 => {
                    self.last_count.store(count, Ordering::SeqCst);
                    debug!(count, "Resolved worker thread count");
                    count
                }
                _ => {
                    warn!(
                        value = %raw,
                        default = DEFAULT_THREAD_COUNT,
                        "Worker thread count setting is not a positive integer, using default"
                    );
                    DEFAULT_THREAD_COUNT
                }
            },
            None => {
                debug!(
                    default = DEFAULT_THREAD_COUNT,
                    "Worker thread count not set, using default"
                );
                DEFAULT_THREAD_COUNT
            }
        }
    }

    /// Returns the last successfully parsed worker-thread count.
    pub fn last_resolved_count(&self) -> u32 {
        self.last_count.load(Ordering::SeqCst)
    }

    /// Resolves the default time zone, if one is configured and valid.
    pub fn default_time_zone(&self) -> Option<Tz> {
        let raw = self.settings.get_string(SCHEDULER_TIMEZONE_KEY)?;
        match Tz::from_str(raw.trim()) {
            Ok(zone) => Some(zone),
            Err(_) => {
                warn!(value = %raw, "Unrecognized time zone setting, ignoring");
                None
            }
        }
    }

    /// Returns true when the host node is part of a cluster.
    pub fn is_clustered(&self) -> bool {
        self.cluster.node_id().is_some()
    }

    /// Builds a fresh [`SchedulerConfig`] from current settings.
    pub fn build(&self) -> SchedulerConfig {
        let refresh = if self.is_clustered() {
            CLUSTERED_REFRESH_INTERVAL_MINUTES
        } else {
            0
        };
        SchedulerConfig::new(self.worker_thread_count(), self.default_time_zone(), refresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MemorySettings, StaticClusterIdentity};

    fn provider(settings: MemorySettings, cluster: StaticClusterIdentity) -> ConfigProvider {
        ConfigProvider::new(Arc::new(settings), Arc::new(cluster))
    }

    #[test]
    fn test_worker_thread_count_default_when_absent() {
        let p = provider(MemorySettings::new(), StaticClusterIdentity::standalone());
        assert_eq!(p.worker_thread_count(), DEFAULT_THREAD_COUNT);
    }

    #[test]
    fn test_worker_thread_count_parses_setting() {
        let settings = MemorySettings::new();
        settings.set_string(SCHEDULER_THREADS_KEY, "12");
        let p = provider(settings, StaticClusterIdentity::standalone());

        assert_eq!(p.worker_thread_count(), 12);
        assert_eq!(p.last_resolved_count(), 12);
    }

    #[test]
    fn test_worker_thread_count_default_when_unparsable() {
        let settings = MemorySettings::new();
        settings.set_string(SCHEDULER_THREADS_KEY, "a lot");
        let p = provider(settings, StaticClusterIdentity::standalone());

        assert_eq!(p.worker_thread_count(), DEFAULT_THREAD_COUNT);
    }

    #[test]
    fn test_worker_thread_count_rejects_zero() {
        let settings = MemorySettings::new();
        settings.set_string(SCHEDULER_THREADS_KEY, "0");
        let p = provider(settings, StaticClusterIdentity::standalone());

        assert_eq!(p.worker_thread_count(), DEFAULT_THREAD_COUNT);
    }

    #[test]
    fn test_default_time_zone() {
        let settings = MemorySettings::new();
        settings.set_string(SCHEDULER_TIMEZONE_KEY, "Europe/Paris");
        let p = provider(settings, StaticClusterIdentity::standalone());

        assert_eq!(p.default_time_zone(), Some(chrono_tz::Europe::Paris));
    }

    #[test]
    fn test_default_time_zone_invalid_is_none() {
        let settings = MemorySettings::new();
        settings.set_string(SCHEDULER_TIMEZONE_KEY, "Moon/Tycho");
        let p = provider(settings, StaticClusterIdentity::standalone());

        assert_eq!(p.default_time_zone(), None);
    }

    #[test]
    fn test_build_standalone_has_zero_refresh() {
        let p = provider(MemorySettings::new(), StaticClusterIdentity::standalone());
        let config = p.build();

        assert_eq!(config.clustered_refresh_interval_minutes, 0);
        assert_eq!(config.worker_thread_count, DEFAULT_THREAD_COUNT);
    }

    #[test]
    fn test_build_clustered_has_fixed_refresh() {
        let p = provider(
            MemorySettings::new(),
            StaticClusterIdentity::clustered("node-1"),
        );
        let config = p.build();

        assert!(p.is_clustered());
        assert_eq!(
            config.clustered_refresh_interval_minutes,
            CLUSTERED_REFRESH_INTERVAL_MINUTES
        );
    }
}
