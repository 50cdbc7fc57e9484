//! Minimax Concave Penalty

use super::{half, with_sign_of};
use ndarray::prelude::*;
use ndarray::NdFloat;

/// Proximal operator of the Minimax Concave Penalty for one coordinate
///
/// ```math
/// r(x) = \begin{cases}
/// \lambda |x| - \frac{x^2}{2\theta} & |x| \leq \theta\lambda \\
/// \frac12 \theta \lambda^2 & |x| > \theta\lambda
/// \end{cases}, \quad \theta > 0, \lambda \geq 0
/// ```
///
/// On $`[0, \theta\lambda]`$ the objective is a quadratic whose curvature is
/// $`1 - 1/\theta`$, so the candidate $`x_1`$ there is
/// - the clipped stationary point if $`\theta > 1`$ (convex),
/// - the endpoint farthest from the vertex if $`\theta < 1`$ (concave),
/// - the endpoint picked by the slope $`\lambda - u`$ if $`\theta = 1`$ (linear).
///
/// It competes with $`x_2 = \max(\theta\lambda, u)`$ on the flat part.
#[inline]
pub fn mcp_scalar<S: NdFloat>(d: S, lambda: S, theta: S) -> S {
    let half = half::<S>();
    let z = theta * lambda;
    let u = d.abs();

    let x1 = if theta > S::one() {
        (theta * (u - lambda) / (theta - S::one()))
            .max(S::zero())
            .min(z)
    } else if theta < S::one() {
        let v = theta * (u - lambda) / (theta - S::one());
        if v.abs() > (v - z).abs() {
            S::zero()
        } else {
            z
        }
    } else if lambda > u {
        S::zero()
    } else {
        z
    };
    let x2 = z.max(u);

    // f(x1) - f(x2)
    let x = if half * (x1 + x2 - (u + u)) * (x1 - x2) + x1 * (lambda - half * x1 / theta)
        - half * z * lambda
        < S::zero()
    {
        x1
    } else {
        x2
    };
    with_sign_of(x, d)
}

/// Minimax Concave Penalty proximal operator over a vector, see [`mcp_scalar`]
pub fn prox_mcp<S: NdFloat>(d: ArrayView1<S>, lambda: S, theta: S) -> Array1<S> {
    d.mapv(|di| mcp_scalar(di, lambda, theta))
}
