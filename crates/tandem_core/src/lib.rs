//! # TANDEM Core Helpers
//!
//! Plain functions with no threads and no locks:
//! - Assumptions that abort when violated
//! - Overflow-checked arithmetic
//! - Byte slice equality, clone and split
//! - Fisher-Yates shuffle and permutations
//!
//! ## Example
//!
//! ```rust,ignore
//! use tandem_core::{permutation, sum_assume_no_overflow};
//!
//! let total = sum_assume_no_overflow(40, 2);
//! let order = permutation(total);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod arith;
pub mod assume;
pub mod bytes;
pub mod error;
pub mod shuffle;

pub use arith::{
    checked_add, checked_mul, mul_assume_no_overflow, mul_no_overflow,
    signed_sum_assume_no_overflow, sum_assume_no_overflow, sum_no_overflow, try_mul, try_sum,
};
pub use assume::{assert_that, assume};
pub use bytes::{bytes_clone, bytes_equal, bytes_equal_opt, slice_split, try_slice_split};
pub use error::{ArithOp, CoreError, CoreResult};
pub use shuffle::{
    permutation, permutation_with, random_u64, shuffle, shuffle_with, RandomSource, SeededRandom,
    ThreadRandom,
};
