//! # Fan-Out Coordinator
//!
//! Run `op(0)`, `op(1)`, ..., `op(num - 1)` on `num` threads and block until
//! every call has returned.
//!
//! ## Architecture
//!
//! ```text
//!                  multipar(num, op)
//!                         │
//!        ┌────────────────┼────────────────┐
//!        ▼                ▼                ▼
//!    thread 0         thread 1   ...   thread num-1
//!    op(0)            op(1)            op(num-1)
//!    arrive()         arrive()         arrive()
//!        │                │                │
//!        └────────────────┼────────────────┘
//!                         ▼
//!               ┌───────────────────┐
//!               │ Countdown         │
//!               │ Mutex<remaining>  │
//!               │ Condvar all_done  │
//!               └───────────────────┘
//!                         │
//!         coordinator: while remaining > 0 { wait }
//! ```
//!
//! The countdown belongs to one call. It is created when the call starts and
//! dropped when the last reference (coordinator or a finishing unit) goes.
//!
//! No ordering between units is guaranteed. The only guarantee is the
//! barrier: `multipar` returns after every unit's decrement was observed
//! under the lock.

use std::convert::Infallible;
use std::sync::Arc;
use std::thread;

use parking_lot::{Condvar, Mutex};
use tandem_core::assume;

/// A boxed unit ready to hand to a thread.
pub(crate) type Unit = Box<dyn FnOnce() + Send + 'static>;

/// Remaining-count monitor shared by one fan-out.
struct Countdown {
    remaining: Mutex<u64>,
    all_done: Condvar,
}

impl Countdown {
    fn new(num: u64) -> Self {
        Self {
            remaining: Mutex::new(num),
            all_done: Condvar::new(),
        }
    }

    /// One unit finished.
    fn arrive(&self) {
        self.retire(1);
    }

    /// Removes `count` units from the barrier and wakes the coordinator.
    fn retire(&self, count: u64) {
        let mut remaining = self.remaining.lock();
        assume(*remaining >= count);
        *remaining -= count;
        self.all_done.notify_one();
    }

    /// Blocks until every unit has arrived or been retired.
    fn wait(&self) {
        let mut remaining = self.remaining.lock();
        while *remaining > 0 {
            self.all_done.wait(&mut remaining);
            tracing::trace!(remaining = *remaining, "coordinator woke");
        }
    }
}

/// Launches `num` units through `launch` and waits for all of them.
///
/// `launch` gets the unit index and the body to run on a new thread. If it
/// fails for unit `k`, units `k..num` are never started: they are retired
/// from the countdown, the `k` running units are still waited for, and the
/// failure is returned as `(k, error)`.
pub(crate) fn fan_out<F, L, E>(num: u64, op: F, mut launch: L) -> Result<(), (u64, E)>
where
    F: Fn(u64) + Send + Sync + 'static,
    L: FnMut(u64, Unit) -> Result<(), E>,
{
    if num == 0 {
        return Ok(());
    }

    tracing::debug!(units = num, "fan-out starting");

    let op = Arc::new(op);
    let countdown = Arc::new(Countdown::new(num));
    let mut failure = None;

    for index in 0..num {
        let op = Arc::clone(&op);
        let arrival = Arc::clone(&countdown);

        // `index` is copied into the closure, one value per unit.
        let unit: Unit = Box::new(move || {
            tracing::trace!(index, "unit started");
            op(index);
            tracing::trace!(index, "unit finished");
            arrival.arrive();
        });

        if let Err(e) = launch(index, unit) {
            countdown.retire(num - index);
            failure = Some((index, e));
            break;
        }
    }

    countdown.wait();

    match failure {
        Some((index, e)) => {
            tracing::debug!(units = num, launched = index, "fan-out aborted");
            Err((index, e))
        }
        None => {
            tracing::debug!(units = num, "fan-out complete");
            Ok(())
        }
    }
}

/// Runs `op(i)` for every `i` in `0..num`, each on its own thread, and
/// returns once all calls have finished.
///
/// `num == 0` returns immediately without touching any lock.
///
/// # Panics
///
/// Panics if the OS fails to create a thread. Use
/// [`crate::Spawner::multipar`] to get an error instead.
///
/// If `op` panics on some thread, that unit never arrives and `multipar`
/// blocks forever.
///
/// # Example
///
/// ```rust,ignore
/// let results = Arc::new(Mutex::new(vec![0u64; 8]));
/// let slots = Arc::clone(&results);
/// multipar(8, move |i| slots.lock()[i as usize] = i * i);
/// ```
pub fn multipar<F>(num: u64, op: F)
where
    F: Fn(u64) + Send + Sync + 'static,
{
    let launched = fan_out(num, op, |_, unit| -> Result<(), Infallible> {
        let _ = thread::spawn(unit);
        Ok(())
    });
    if let Err((_, never)) = launched {
        match never {}
    }
}
