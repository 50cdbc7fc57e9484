//! Indexed soft-threshold
//!
//! Historically dispatched as type 3 ("TNN") by proximal-regularization
//! front ends that documented type 3 as SCAD. The kernel does not solve the
//! SCAD problem: it soft-thresholds the tail `x[theta - 1..]` of a seeded
//! buffer and leaves the head untouched. Here the seed is always a copy of
//! the input, so the result only depends on `d`. The documented SCAD
//! operator lives in [`scad_scalar`](super::scad_scalar).

use super::soft_threshold;
use crate::error::{ProxError, Result};
use ndarray::prelude::*;
use ndarray::NdFloat;

/// First thresholded index for a given `theta`, `trunc(theta - 1)`.
///
/// `theta - 1` must lie in `[0, n]`; at `n` nothing is thresholded.
pub fn tnn_offset<S: NdFloat>(theta: S, n: usize) -> Result<usize> {
    if !theta.is_finite() {
        return Err(ProxError::invalid_parameter(
            "theta",
            theta,
            "must be finite",
        ));
    }
    let offset = theta - S::one();
    if offset < S::zero() {
        return Err(ProxError::invalid_parameter(
            "theta",
            theta,
            "cutoff theta - 1 must be non-negative",
        ));
    }
    let too_long = || {
        ProxError::invalid_parameter("theta", theta, "cutoff theta - 1 exceeds the vector length")
    };
    match S::from(n) {
        Some(len) if offset <= len => {}
        _ => return Err(too_long()),
    }
    offset.trunc().to_usize().ok_or_else(too_long)
}

/// Soft-threshold the coordinates of `d` at indices `offset..`, copying the rest
///
/// Panics if `offset > d.len()`, see [`tnn_offset`].
pub fn indexed_soft_threshold<S: NdFloat>(
    d: ArrayView1<S>,
    lambda: S,
    offset: usize,
) -> Array1<S> {
    let mut x = d.to_owned();
    x.slice_mut(s![offset..])
        .mapv_inplace(|xi| soft_threshold(xi, lambda));
    x
}
