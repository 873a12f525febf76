//! Boundary traits over the live process's thread groups.
//!
//! Lookup is inherently racy: groups and threads can appear or vanish
//! between calls. Results are snapshots, never guarantees.

use std::sync::Arc;

use crate::error::GroupError;

/// A single worker thread inside a group.
pub trait ThreadHandle: Send + Sync {
    /// The thread's name.
    fn name(&self) -> String;

    /// Forcibly terminates the thread.
    ///
    /// There is no cooperative signal; this is an abrupt, unsafe stop. The
    /// call either returns or fails, independently of other threads in the
    /// group.
    fn terminate(&self) -> Result<(), GroupError>;
}

/// A live thread group.
pub trait GroupHandle: Send + Sync {
    /// The group's name.
    fn name(&self) -> String;

    /// Number of threads currently active in the group.
    fn active_count(&self) -> usize;

    /// Snapshot of the threads currently enumerated under the group.
    fn threads(&self) -> Vec<Arc<dyn ThreadHandle>>;

    /// Requests the group object itself be released.
    fn release(&self) -> Result<(), GroupError>;
}

/// Name-keyed lookup over the process's live thread groups.
pub trait GroupDirectory: Send + Sync {
    /// Walks the live group tree from its root and returns the first group
    /// whose name matches exactly.
    fn find_by_name(&self, name: &str) -> Option<Arc<dyn GroupHandle>>;

    /// Returns true when `name` resolves to a group with at least one
    /// active thread.
    fn is_live(&self, name: &str) -> bool {
        self.find_by_name(name)
            .map(|group| group.active_count() > 0)
            .unwrap_or(false)
    }
}
