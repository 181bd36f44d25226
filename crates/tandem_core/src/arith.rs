//! # Overflow-Checked Arithmetic
//!
//! Three flavours of every operation:
//!
//! - `checked_*`: wrapping result plus an overflow flag
//! - `*_assume_no_overflow`: [`assume`]s the operation fits, then returns it
//! - `try_*`: reports overflow as [`CoreError::Overflow`]
//!
//! The workspace compiles with `overflow-checks = false` in release, so the
//! checks here are the only ones that run.

use crate::assume::assume;
use crate::error::{ArithOp, CoreError, CoreResult};

/// Adds two numbers, returning the wrapped sum and whether it overflowed.
#[inline]
#[must_use]
pub const fn checked_add(x: u64, y: u64) -> (u64, bool) {
    x.overflowing_add(y)
}

/// Multiplies two numbers, returning the wrapped product and whether it
/// overflowed.
#[inline]
#[must_use]
pub const fn checked_mul(x: u64, y: u64) -> (u64, bool) {
    x.overflowing_mul(y)
}

/// Returns true if `x + y` does not overflow.
#[inline]
#[must_use]
pub const fn sum_no_overflow(x: u64, y: u64) -> bool {
    x.wrapping_add(y) >= x
}

/// Returns `x + y`, assuming it does not overflow.
///
/// # Panics
///
/// Aborts if the sum overflows.
#[inline]
#[must_use]
#[track_caller]
pub fn sum_assume_no_overflow(x: u64, y: u64) -> u64 {
    assume(sum_no_overflow(x, y));
    x.wrapping_add(y)
}

/// Returns true if `x * y` does not overflow.
#[inline]
#[must_use]
pub const fn mul_no_overflow(x: u64, y: u64) -> bool {
    if x == 0 || y == 0 {
        return true;
    }
    x <= u64::MAX / y
}

/// Returns `x * y`, assuming it does not overflow.
///
/// # Panics
///
/// Aborts if the product overflows.
#[inline]
#[must_use]
#[track_caller]
pub fn mul_assume_no_overflow(x: u64, y: u64) -> u64 {
    assume(mul_no_overflow(x, y));
    x.wrapping_mul(y)
}

/// Returns `x + y` for signed operands, assuming the sum stays within
/// `i64::MIN..=i64::MAX`.
///
/// # Panics
///
/// Aborts on overflow or underflow.
#[inline]
#[must_use]
#[track_caller]
pub fn signed_sum_assume_no_overflow(x: i64, y: i64) -> i64 {
    let (sum, overflowed) = x.overflowing_add(y);
    assume(!overflowed);
    sum
}

/// Checked addition with error.
pub fn try_sum(x: u64, y: u64) -> CoreResult<u64> {
    x.checked_add(y).ok_or(CoreError::Overflow {
        op: ArithOp::Add,
        lhs: x,
        rhs: y,
    })
}

/// Checked multiplication with error.
pub fn try_mul(x: u64, y: u64) -> CoreResult<u64> {
    x.checked_mul(y).ok_or(CoreError::Overflow {
        op: ArithOp::Mul,
        lhs: x,
        rhs: y,
    })
}
