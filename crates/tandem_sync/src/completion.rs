//! # Completion Handle
//!
//! Spawn one unit of work, wait for it exactly once.
//!
//! ```text
//!   caller                         spawned thread
//!   ──────                         ──────────────
//!   spawn(work) ──────────────────> work()
//!   ... keeps running ...          lock; done = true; notify; unlock
//!   join(): lock
//!           while !done { wait }
//!           done = false           <- the signal is consumed
//!           unlock
//! ```
//!
//! ## Single Consumer
//!
//! `join` consumes the signal. A second `join` without a new spawn has
//! nothing left to observe and blocks forever. This is deliberate: misuse
//! shows up as a hang under test instead of a stale success.
//!
//! If the unit of work panics, completion is never signaled and `join`
//! blocks forever as well.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// One-shot signal between a producer thread and a single waiter.
///
/// `done` lives inside the mutex, so it is only ever touched with the lock
/// held.
struct CompletionSignal {
    done: Mutex<bool>,
    condvar: Condvar,
}

impl CompletionSignal {
    fn new() -> Self {
        Self {
            done: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Called by the spawned thread, once.
    fn signal(&self) {
        let mut done = self.done.lock();
        *done = true;
        self.condvar.notify_one();
    }

    fn wait(&self) {
        let mut done = self.done.lock();
        while !*done {
            self.condvar.wait(&mut done);
        }
        *done = false;
    }

    fn wait_timeout(&self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            // Unrepresentable deadline: no different from waiting forever.
            self.wait();
            return true;
        };

        let mut done = self.done.lock();
        while !*done {
            if self.condvar.wait_until(&mut done, deadline).timed_out() {
                break;
            }
        }
        // Re-read after a timeout: the signal may have landed on the deadline.
        let observed = *done;
        *done = false;
        observed
    }

    fn is_done(&self) -> bool {
        *self.done.lock()
    }
}

/// Handle to a spawned unit of work.
///
/// Call [`SpawnHandle::join`] at most once per spawn.
pub struct SpawnHandle {
    signal: Arc<CompletionSignal>,
}

impl SpawnHandle {
    /// Blocks until the unit of work has finished.
    ///
    /// Consumes the completion signal. Joining the same handle a second time
    /// blocks forever.
    pub fn join(&self) {
        self.signal.wait();
    }

    /// Like [`SpawnHandle::join`], but gives up after `timeout`.
    ///
    /// Returns true (and consumes the signal) if completion was observed.
    /// On timeout the handle is left as it was.
    #[must_use]
    pub fn join_timeout(&self, timeout: Duration) -> bool {
        self.signal.wait_timeout(timeout)
    }

    /// Returns true if the unit finished and the signal is still unconsumed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.signal.is_done()
    }
}

impl std::fmt::Debug for SpawnHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpawnHandle")
            .field("done", &self.is_done())
            .finish()
    }
}

/// Pairs a fresh handle with the thread body that will signal it.
pub(crate) fn prepare<F>(work: F) -> (SpawnHandle, impl FnOnce() + Send + 'static)
where
    F: FnOnce() + Send + 'static,
{
    let signal = Arc::new(CompletionSignal::new());
    let producer = Arc::clone(&signal);

    let body = move || {
        work();
        producer.signal();
        tracing::trace!("spawned unit signaled completion");
    };

    (SpawnHandle { signal }, body)
}

/// Runs `work` on a new thread and returns immediately.
///
/// # Panics
///
/// Panics if the OS fails to create a thread. Use
/// [`crate::Spawner::spawn`] to get an error instead.
pub fn spawn<F>(work: F) -> SpawnHandle
where
    F: FnOnce() + Send + 'static,
{
    let (handle, body) = prepare(work);
    let _ = thread::spawn(body);
    handle
}
