//! # TANDEM Sync
//!
//! Join barriers built from first principles on a mutex and a condition
//! variable:
//! - [`spawn`] / [`SpawnHandle::join`]: wait for one unit of work
//! - [`multipar`]: run N units in parallel, wait for all of them
//! - [`skip`]: a no-op step
//!
//! ## Architecture Rules
//!
//! 1. **Monitor pattern only** - no channels, no wait-groups, no futures
//! 2. **Predicates re-checked in a loop** - spurious wake-ups are harmless
//! 3. **No lock held while work runs**
//! 4. **State scoped to one call** - nothing global, nothing reused
//!
//! ## Example
//!
//! ```rust,ignore
//! use tandem_sync::{multipar, spawn};
//!
//! let handle = spawn(|| warm_cache());
//! multipar(8, |shard| rebuild(shard));
//! handle.join();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod completion;
pub mod config;
pub mod error;
pub mod multipar;
pub mod skip;
pub mod spawner;

pub use completion::{spawn, SpawnHandle};
pub use config::SpawnConfig;
pub use error::{SyncError, SyncResult};
pub use multipar::multipar;
pub use skip::skip;
pub use spawner::Spawner;
