//! Smoothly Clipped Absolute Deviation

use super::{argmin::argmin3, half, with_sign_of};
use ndarray::prelude::*;
use ndarray::NdFloat;

/// Proximal operator of the SCAD penalty for one coordinate
///
/// ```math
/// r(x) = \begin{cases}
/// \lambda |x| & |x| \leq \lambda \\
/// \frac{-x^2 + 2\theta\lambda|x| - \lambda^2}{2(\theta - 1)} & \lambda < |x| \leq \theta\lambda \\
/// \frac12 (\theta + 1) \lambda^2 & |x| > \theta\lambda
/// \end{cases}, \quad \theta > 2, \lambda \geq 0
/// ```
///
/// One candidate is taken from each of the three pieces and the one with the
/// lowest objective wins, ties going to the piece closest to the origin.
#[inline]
pub fn scad_scalar<S: NdFloat>(d: S, lambda: S, theta: S) -> S {
    let half = half::<S>();
    let two = S::one() + S::one();
    let z = theta * lambda;
    let w = lambda * lambda;
    let u = d.abs();

    let xtemp = [
        lambda.min((u - lambda).max(S::zero())),
        z.min(lambda.max((u * (theta - S::one()) - z) / (theta - two))),
        z.max(u),
    ];
    let sq = |x: S| half * (x - u) * (x - u);
    let ytemp = [
        sq(xtemp[0]) + lambda * xtemp[0],
        sq(xtemp[1]) + half * (xtemp[1] * (z + z - xtemp[1]) - w) / (theta - S::one()),
        sq(xtemp[2]) + half * (theta + S::one()) * w,
    ];

    with_sign_of(xtemp[argmin3(ytemp)], d)
}

/// SCAD proximal operator over a vector, see [`scad_scalar`]
pub fn prox_scad<S: NdFloat>(d: ArrayView1<S>, lambda: S, theta: S) -> Array1<S> {
    d.mapv(|di| scad_scalar(di, lambda, theta))
}
