//! # Assumptions
//!
//! **Use with care: assumptions are trusted and should be justified.**
//!
//! An assumption is a condition the caller promises holds. Verification
//! tooling takes it as a fact; at runtime a violated assumption stops the
//! process. The workspace builds with `panic = "abort"`, so the panic raised
//! here never unwinds into caller code outside the test harness.

/// Stops the process if `condition` is false.
///
/// # Panics
///
/// Panics (aborting under the workspace profiles) when `condition` is false.
#[inline]
#[track_caller]
pub fn assume(condition: bool) {
    if !condition {
        panic!("assumption violated");
    }
}

/// Library-level assertion.
///
/// Unlike [`assume`], a failed assertion is a bug in the caller, not a
/// trusted fact that turned out false.
///
/// # Panics
///
/// Panics when `condition` is false.
#[inline]
#[track_caller]
pub fn assert_that(condition: bool) {
    if !condition {
        panic!("assertion failed");
    }
}
