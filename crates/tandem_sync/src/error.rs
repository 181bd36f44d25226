//! # Sync Error Types
//!
//! Only configured spawning can fail. The free `spawn`/`multipar` functions
//! have no error channel, and neither do the units of work themselves.

use thiserror::Error;

/// Errors that can occur when spawning through a [`crate::Spawner`].
#[derive(Error, Debug)]
pub enum SyncError {
    /// The OS refused to create the thread for a single spawn.
    #[error("failed to spawn thread: {source}")]
    Thread {
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The OS refused to create the thread for one fan-out unit.
    #[error("failed to spawn thread for unit {index}: {source}")]
    Spawn {
        /// Index of the unit that could not be launched.
        index: u64,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// Invalid spawn configuration.
    #[error("invalid spawn configuration: {0}")]
    Config(String),
}

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
