//! Log-Sum Penalty

use super::{argmin::argmin3, half, with_sign_of};
use crate::error::{ProxError, Result};
use log::debug;
use ndarray::prelude::*;
use ndarray::NdFloat;

/// Reduced-precision magnitude step used by [`lsp_scalar`]
///
/// The coordinate is rounded through `f32` before its magnitude is taken,
/// so the LSP solution carries a relative error of at most `f32::EPSILON`
/// with respect to the full-precision input. For `f32` inputs this is the
/// identity. Finite values beyond `f32::MAX` narrow to an infinity, see
/// [`check_lsp_range`].
#[inline]
pub fn narrow_to_single<S: NdFloat>(d: S) -> S {
    d.to_f32().and_then(|x| S::from(x)).unwrap_or(d)
}

/// Rejects the first coordinate whose narrowed magnitude overflows in [`lsp_scalar`]
///
/// The discriminant needs `u^2` to be finite, so this rejects values
/// beyond `f32::MAX` as well as `f32` values beyond `sqrt(f32::MAX)`.
pub fn check_lsp_range<S: NdFloat>(d: ArrayView1<S>) -> Result<()> {
    let overflows = |di: &S| {
        let u = narrow_to_single(*di).abs();
        !(u * u).is_finite()
    };
    match d.iter().position(overflows) {
        Some(index) => Err(ProxError::InputOutOfRange {
            index,
            value: d[index].to_f64().unwrap_or(f64::NAN),
        }),
        None => Ok(()),
    }
}

/// Discriminant of the LSP stationarity condition, or `None` if it has no
/// real roots.
///
/// Values in `[-4 eps scale, 0)` are rounding artifacts of a double root
/// and are clamped to zero.
#[inline]
fn clamp_discriminant<S: NdFloat>(v: S, scale: S) -> Option<S> {
    if v >= S::zero() {
        return Some(v);
    }
    let four = (S::one() + S::one()) * (S::one() + S::one());
    if v >= -four * S::epsilon() * scale {
        debug!("lsp: clamping discriminant {} to zero", v);
        Some(S::zero())
    } else {
        None
    }
}

/// Proximal operator of the Log-Sum Penalty for one coordinate
///
/// ```math
/// r(x) = \lambda \log(1 + |x| / \theta), \quad \theta > 0, \lambda \geq 0
/// ```
///
/// Stationary points on $`x > 0`$ solve
/// $`x^2 - (u - \theta) x + \lambda - u\theta = 0`$. When the discriminant
/// is negative there is none and the solution is zero. Otherwise both roots
/// (clipped at zero) compete against $`x = 0`$ on the true objective.
///
/// The magnitude $`u`$ is computed from [`narrow_to_single`] of `d`, while the
/// sign comes from the full-precision `d`.
#[inline]
pub fn lsp_scalar<S: NdFloat>(d: S, lambda: S, theta: S) -> S {
    let half = half::<S>();
    let four = (S::one() + S::one()) * (S::one() + S::one());

    let u = narrow_to_single(d).abs();
    let z = u - theta;
    let v = z * z - four * (lambda - u * theta);
    let v = match clamp_discriminant(v, z * z + four * lambda.abs() + four * u * theta) {
        Some(v) => v,
        None => return S::zero(),
    };

    let sqrtv = v.sqrt();
    let xtemp = [
        S::zero(),
        (half * (z + sqrtv)).max(S::zero()),
        (half * (z - sqrtv)).max(S::zero()),
    ];
    let objective = |x: S| {
        let r = x - u;
        half * r * r + lambda * (S::one() + x / theta).ln()
    };
    let ytemp = [half * u * u, objective(xtemp[1]), objective(xtemp[2])];

    with_sign_of(xtemp[argmin3(ytemp)], d)
}

/// Log-Sum Penalty proximal operator over a vector, see [`lsp_scalar`]
pub fn prox_lsp<S: NdFloat>(d: ArrayView1<S>, lambda: S, theta: S) -> Array1<S> {
    d.mapv(|di| lsp_scalar(di, lambda, theta))
}
