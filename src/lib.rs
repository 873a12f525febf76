//! sched-tuner: live worker-thread reconfiguration for an embedded job
//! scheduler.
//!
//! The host scheduler exposes no supported API to change its worker pool
//! size after startup. This library swaps the scheduler's internal
//! configuration object and coaxes it into spawning additional pools of
//! worker threads ("thread groups"), tracking each group through its
//! lifecycle and offering best-effort, explicitly-unsafe teardown.

// Core modules
pub mod config;
pub mod engine;
pub mod error;
pub mod groups;
pub mod host;
pub mod settings;

// Re-export the main entry points and error types
pub use engine::{ConfigSnapshot, OperationResult, ReconfigurationEngine};
pub use error::{EngineError, GroupError, HostError};
