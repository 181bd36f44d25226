//! # No-op Step
//!
//! An explicit place for verification tooling to put a reduction step.

/// Does nothing.
#[inline(never)]
pub fn skip() {}
