//! # Configured Spawning
//!
//! [`Spawner`] offers the same `spawn`/`multipar` operations as the free
//! functions, but creates threads through `std::thread::Builder` so that
//! names and stack sizes come from a [`SpawnConfig`] and OS failures come
//! back as [`SyncError::Thread`] or [`SyncError::Spawn`].

use std::thread;

use crate::completion::{self, SpawnHandle};
use crate::config::SpawnConfig;
use crate::error::{SyncError, SyncResult};
use crate::multipar::fan_out;

/// Thread factory for completion handles and fan-outs.
///
/// ## Usage
///
/// ```rust,ignore
/// let spawner = Spawner::new(SpawnConfig::from_file("spawn.toml")?)?;
///
/// let handle = spawner.spawn(|| index_segment())?;
/// spawner.multipar(16, |shard| compact(shard))?;
/// handle.join();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Spawner {
    config: SpawnConfig,
}

impl Spawner {
    /// Creates a spawner after validating `config`.
    pub fn new(config: SpawnConfig) -> SyncResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    fn builder(&self, index: Option<u64>) -> thread::Builder {
        let mut builder = thread::Builder::new();
        if let Some(name) = self.config.thread_name(index) {
            builder = builder.name(name);
        }
        if let Some(size) = self.config.stack_size {
            builder = builder.stack_size(size);
        }
        builder
    }

    /// Runs `work` on a new configured thread and returns immediately.
    pub fn spawn<F>(&self, work: F) -> SyncResult<SpawnHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        let (handle, body) = completion::prepare(work);
        let _ = self.builder(None).spawn(body).map_err(|source| {
            tracing::warn!(error = %source, "failed to spawn thread");
            SyncError::Thread { source }
        })?;
        Ok(handle)
    }

    /// Runs `op(i)` for every `i` in `0..num` on configured threads and
    /// returns once all launched calls have finished.
    ///
    /// If thread `k` cannot be created, units `k..num` never run, units
    /// `0..k` are still waited for, and `SyncError::Spawn { index: k, .. }`
    /// is returned.
    pub fn multipar<F>(&self, num: u64, op: F) -> SyncResult<()>
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        fan_out(num, op, |index, unit| {
            self.builder(Some(index)).spawn(unit).map(drop)
        })
        .map_err(|(index, source)| {
            tracing::warn!(index, units = num, error = %source, "failed to spawn unit");
            SyncError::Spawn { index, source }
        })
    }
}
