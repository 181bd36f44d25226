//! # TANDEM
//!
//! Minimal runtime helpers in two layers:
//!
//! - [`tandem_core`]: plain functions. Assumptions, overflow-checked arithmetic,
//!   byte slices, Fisher-Yates shuffles.
//! - [`tandem_sync`]: join barriers built on one mutex and one condition variable.
//!   [`spawn`] + [`SpawnHandle::join`] wait for one unit of work,
//!   [`multipar`] waits for N.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tandem::{multipar, sum_assume_no_overflow};
//!
//! let width = sum_assume_no_overflow(base, extra);
//! multipar(width, move |i| process(i));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub use tandem_core;
pub use tandem_sync;

pub use tandem_core::{
    assert_that, assume, bytes_clone, bytes_equal, bytes_equal_opt, checked_add, checked_mul,
    mul_assume_no_overflow, mul_no_overflow, permutation, permutation_with, random_u64, shuffle,
    shuffle_with, signed_sum_assume_no_overflow, slice_split, sum_assume_no_overflow,
    sum_no_overflow, try_mul, try_slice_split, try_sum, ArithOp, CoreError, CoreResult,
    RandomSource, SeededRandom, ThreadRandom,
};
pub use tandem_sync::{
    multipar, skip, spawn, SpawnConfig, SpawnHandle, Spawner, SyncError, SyncResult,
};
