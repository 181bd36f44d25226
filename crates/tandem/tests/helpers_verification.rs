//! # Helper Verification Tests
//!
//! The pure helpers through the facade, and the helpers combined with the
//! join barrier.
//!
//! Run with: cargo test --test helpers_verification

use std::sync::Arc;

use parking_lot::Mutex;
use tandem::{
    bytes_clone, bytes_equal, multipar, permutation, permutation_with, shuffle_with, skip,
    slice_split, sum_assume_no_overflow, try_sum, CoreError, SeededRandom,
};

#[test]
fn verify_permutation_drives_fan_out() {
    // Unit i handles the job at position i of a shuffled order; every job
    // must still be handled exactly once.
    let order = Arc::new(permutation_with(40, &mut SeededRandom::new(9)));
    let handled = Arc::new(Mutex::new(Vec::new()));

    let jobs = Arc::clone(&order);
    let sink = Arc::clone(&handled);
    multipar(40, move |i| {
        let job = jobs[usize::try_from(i).unwrap()];
        sink.lock().push(job);
    });

    let mut handled = handled.lock().clone();
    handled.sort_unstable();
    assert_eq!(handled, (0..40).collect::<Vec<u64>>());
}

#[test]
fn verify_parallel_sums_match_sequential() {
    let totals = Arc::new(Mutex::new(vec![0u64; 8]));
    let slots = Arc::clone(&totals);

    multipar(8, move |i| {
        let mut acc = 0u64;
        for k in 0..1_000u64 {
            acc = sum_assume_no_overflow(acc, i * 1_000 + k);
        }
        slots.lock()[usize::try_from(i).unwrap()] = acc;
    });

    let parallel: u64 = totals.lock().iter().sum();
    let sequential: u64 = (0..8_000u64).sum();
    assert_eq!(parallel, sequential);
}

#[test]
fn verify_overflow_reported_not_wrapped() {
    assert_eq!(try_sum(u64::MAX - 1, 1), Ok(u64::MAX));
    assert!(matches!(try_sum(u64::MAX, 1), Err(CoreError::Overflow { .. })));
}

#[test]
fn verify_split_then_compare() {
    let frame = [0xAAu8, 0xBB, 0x01, 0x02, 0x03];
    let (header, body) = slice_split(&frame, 2);

    assert!(bytes_equal(header, &[0xAA, 0xBB]));
    let owned = bytes_clone(Some(body)).unwrap();
    assert!(bytes_equal(&owned, &[0x01, 0x02, 0x03]));
}

#[test]
fn verify_same_seed_same_shuffle() {
    let mut a: Vec<u64> = (0..100).collect();
    let mut b = a.clone();

    shuffle_with(&mut a, &mut SeededRandom::new(1234));
    shuffle_with(&mut b, &mut SeededRandom::new(1234));
    assert_eq!(a, b);

    let mut fresh = permutation(100);
    fresh.sort_unstable();
    assert_eq!(fresh, (0..100).collect::<Vec<u64>>());
}

#[test]
fn verify_skip_is_inert() {
    skip();
    skip();
}
