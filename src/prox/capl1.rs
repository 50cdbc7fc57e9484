//! Capped L1

use super::{half, with_sign_of};
use ndarray::prelude::*;
use ndarray::NdFloat;

/// Proximal operator of the Capped L1 penalty for one coordinate
///
/// ```math
/// r(x) = \lambda \min(|x|, \theta), \quad \theta > 0, \lambda \geq 0
/// ```
///
/// The two candidates are the flat branch $`x_1 = \max(u, \theta)`$ and the
/// clipped soft-threshold $`x_2 = \min(\theta, \max(0, u - \lambda))`$.
/// $`x_1`$ is kept only if its objective is strictly lower.
#[inline]
pub fn capl1_scalar<S: NdFloat>(d: S, lambda: S, theta: S) -> S {
    let u = d.abs();
    let x1 = u.max(theta);
    let x2 = theta.min((u - lambda).max(S::zero()));
    // f(x1) - f(x2), with the penalty of x1 equal to lambda*theta
    let gap = half::<S>() * (x1 + x2 - (u + u)) * (x1 - x2) + lambda * (theta - x2);
    let x = if gap < S::zero() {
        x1
    } else {
        x2
    };
    with_sign_of(x, d)
}

/// Capped L1 proximal operator over a vector, see [`capl1_scalar`]
pub fn prox_capl1<S: NdFloat>(d: ArrayView1<S>, lambda: S, theta: S) -> Array1<S> {
    d.mapv(|di| capl1_scalar(di, lambda, theta))
}
