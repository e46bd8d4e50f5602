//! Test utilities for thermocline development.
//!
//! Provides standard grid fixtures and float assertions shared by the
//! integration tests of the grid and field crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{basin_2d, channel_2d, periodic_ring, unit_interval};

/// Assert that two slices are element-wise equal within `tol`.
///
/// Panics with the first offending index.
pub fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {i}: {a} differs from {e} by more than {tol}"
        );
    }
}

/// Assert that two floats are equal within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "{actual} differs from {expected} by more than {tol}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_close_accepts_small_differences() {
        assert_all_close(&[1.0, 2.0], &[1.0 + 1e-13, 2.0 - 1e-13], 1e-12);
    }

    #[test]
    #[should_panic(expected = "index 1")]
    fn all_close_reports_index() {
        assert_all_close(&[1.0, 2.0], &[1.0, 2.5], 1e-12);
    }
}
