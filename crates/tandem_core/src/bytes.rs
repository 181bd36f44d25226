//! # Byte Slice Helpers
//!
//! A missing buffer is modelled as `None`. For comparison purposes a missing
//! buffer and an empty one are the same thing; for cloning they are not.

use crate::assume::assume;
use crate::error::{CoreError, CoreResult};

/// Tests whether two byte slices have the same length and contents.
#[inline]
#[must_use]
pub fn bytes_equal(x: &[u8], y: &[u8]) -> bool {
    x == y
}

/// Same as [`bytes_equal`], treating `None` as the empty slice.
#[inline]
#[must_use]
pub fn bytes_equal_opt(x: Option<&[u8]>, y: Option<&[u8]>) -> bool {
    bytes_equal(x.unwrap_or_default(), y.unwrap_or_default())
}

/// Copies a byte buffer. `None` stays `None`; anything else (including an
/// empty slice) becomes an independent, owned copy.
#[inline]
#[must_use]
pub fn bytes_clone(b: Option<&[u8]>) -> Option<Vec<u8>> {
    b.map(<[u8]>::to_vec)
}

/// Splits `s` into its first `n` elements and the remainder.
///
/// # Panics
///
/// Aborts if `n > s.len()`.
#[inline]
#[must_use]
#[track_caller]
pub fn slice_split<T>(s: &[T], n: usize) -> (&[T], &[T]) {
    assume(n <= s.len());
    s.split_at(n)
}

/// Checked form of [`slice_split`].
pub fn try_slice_split<T>(s: &[T], n: usize) -> CoreResult<(&[T], &[T])> {
    if n > s.len() {
        return Err(CoreError::SplitOutOfBounds { at: n, len: s.len() });
    }
    Ok(s.split_at(n))
}
