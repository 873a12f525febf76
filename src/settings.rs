//! Host-wide settings boundary.
//!
//! The engine never owns persistent configuration: the desired worker-thread
//! count lives in the host's key/value settings store, and cluster membership
//! comes from the host's node identity. Both are consumed through the traits
//! defined here.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

/// Settings key holding the desired worker-thread count as base-10 text.
pub const SCHEDULER_THREADS_KEY: &str = "scheduler-threads-key";

/// Settings key holding the default time-zone identifier.
pub const SCHEDULER_TIMEZONE_KEY: &str = "scheduler-timezone-key";

/// Worker-thread count used when the setting is absent or unparsable.
pub const DEFAULT_THREAD_COUNT: u32 = 4;

/// Key/value settings store exposed by the host.
///
/// Implementations must be safe to call from multiple operator-triggered
/// requests at once.
pub trait SettingsStore: Send + Sync {
    /// Returns the raw string value for `key`, if set.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Sets the raw string value for `key`.
    fn set_string(&self, key: &str, value: &str);
}

/// Cluster identity of the host node.
pub trait ClusterIdentity: Send + Sync {
    /// Returns the node identifier, or `None` when the host is not part of
    /// a cluster.
    fn node_id(&self) -> Option<String>;
}

/// Seeds the default worker-thread count into the settings store.
///
/// Intended to be called once from the host's startup hook. Leaves an
/// existing non-empty value untouched.
pub fn seed_default_thread_count(settings: &dyn SettingsStore) {
    match settings.get_string(SCHEDULER_THREADS_KEY) {
        Some(value) if !value.trim().is_empty() => {
            debug!(value = %value, "Scheduler thread count already set");
        }
        _ => {
            debug!(
                default = DEFAULT_THREAD_COUNT,
                "Seeding default scheduler thread count"
            );
            settings.set_string(SCHEDULER_THREADS_KEY, &DEFAULT_THREAD_COUNT.to_string());
        }
    }
}

/// In-memory settings store backed by a `RwLock`ed map.
///
/// Useful for tests and for hosts that manage persistence elsewhere.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }
}

/// Static cluster identity, fixed at construction.
#[derive(Debug, Default)]
pub struct StaticClusterIdentity {
    node_id: Option<String>,
}

impl StaticClusterIdentity {
    /// Identity for a standalone (non-clustered) node.
    pub fn standalone() -> Self {
        Self { node_id: None }
    }

    /// Identity for a clustered node with the given id.
    pub fn clustered(node_id: impl Into<String>) -> Self {
        Self {
            node_id: Some(node_id.into()),
        }
    }
}

impl ClusterIdentity for StaticClusterIdentity {
    fn node_id(&self) -> Option<String> {
        self.node_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_settings_roundtrip() {
        let settings = MemorySettings::new();
        assert_eq!(settings.get_string("missing"), None);

        settings.set_string("key", "value");
        assert_eq!(settings.get_string("key"), Some("value".to_string()));

        settings.set_string("key", "other");
        assert_eq!(settings.get_string("key"), Some("other".to_string()));
    }

    #[test]
    fn test_seed_default_thread_count_when_absent() {
        let settings = MemorySettings::new();
        seed_default_thread_count(&settings);

        assert_eq!(
            settings.get_string(SCHEDULER_THREADS_KEY),
            Some("4".to_string())
        );
    }

    #[test]
    fn test_seed_default_thread_count_preserves_existing() {
        let settings = MemorySettings::new();
        settings.set_string(SCHEDULER_THREADS_KEY, "12");
        seed_default_thread_count(&settings);

        assert_eq!(
            settings.get_string(SCHEDULER_THREADS_KEY),
            Some("12".to_string())
        );
    }

    #[test]
    fn test_seed_default_thread_count_replaces_blank() {
        let settings = MemorySettings::new();
        settings.set_string(SCHEDULER_THREADS_KEY, "  ");
        seed_default_thread_count(&settings);

        assert_eq!(
            settings.get_string(SCHEDULER_THREADS_KEY),
            Some("4".to_string())
        );
    }

    #[test]
    fn test_static_cluster_identity() {
        assert_eq!(StaticClusterIdentity::standalone().node_id(), None);
        assert_eq!(
            StaticClusterIdentity::clustered("node-1").node_id(),
            Some("node-1".to_string())
        );
    }
}
