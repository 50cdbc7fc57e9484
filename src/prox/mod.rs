//! Proximal Operators of Non-Convex Regularizers
//!
//! Each kernel solves the separable problem
//! ```math
//! \mathrm{prox}_r(d) = \mathrm{arg}\!\min_x \frac12 \|x - d\|_2^2 + \sum_i r(x_i)
//! ```
//! one coordinate at a time, with $`u = |d_i|`$ and the minimization
//! carried out over $`x \geq 0`$ before the sign of $`d_i`$ is restored.
//!
//! The `*_scalar` functions are the per-coordinate solvers. The `prox_*`
//! functions broadcast them over a vector and assume their parameters are
//! already valid; see [`Proximal`](crate::Proximal) for the
//! checked entry point.

mod argmin;
pub use argmin::*;

mod capl1;
pub use capl1::*;

mod lsp;
pub use lsp::*;

mod scad;
pub use scad::*;

mod tnn;
pub use tnn::*;

mod mcp;
pub use mcp::*;

use ndarray::NdFloat;

/// Soft-thresholding, the proximal operator of $`\lambda|x|`$
///
/// ```math
/// \mathrm{sign}(x) \max(|x| - \lambda, 0)
/// ```
#[inline]
pub fn soft_threshold<S: NdFloat>(x: S, lambda: S) -> S {
    if x > S::zero() {
        (x - lambda).max(S::zero())
    } else {
        (x + lambda).min(S::zero())
    }
}

/// Give the non-negative magnitude `x` the sign of `d` (zero counts as positive).
#[inline]
pub(crate) fn with_sign_of<S: NdFloat>(x: S, d: S) -> S {
    if d >= S::zero() {
        x
    } else {
        -x
    }
}

#[inline]
pub(crate) fn half<S: NdFloat>() -> S {
    S::one() / (S::one() + S::one())
}


#[cfg(all(rustc_nightly, test))]
mod benches {
    use super::*;
    use ndarray::prelude::*;
    use test::Bencher;

    fn input() -> Array1<f64> {
        Array1::linspace(-10., 10., 4096)
    }

    #[bench]
    fn bench_capl1(b: &mut Bencher) {
        let d = input();
        b.iter(|| prox_capl1(d.view(), 1.0, 3.0));
    }

    #[bench]
    fn bench_lsp(b: &mut Bencher) {
        let d = input();
        b.iter(|| prox_lsp(d.view(), 1.0, 2.0));
    }

    #[bench]
    fn bench_mcp(b: &mut Bencher) {
        let d = input();
        b.iter(|| prox_mcp(d.view(), 1.0, 3.0));
    }

    #[bench]
    fn bench_scad(b: &mut Bencher) {
        let d = input();
        b.iter(|| prox_scad(d.view(), 1.0, 3.7));
    }
}
