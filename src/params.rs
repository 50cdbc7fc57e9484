//! Validated proximal operator configuration and dispatch

use log::trace;
use ndarray::prelude::*;
use ndarray::{NdFloat, Zip};

use crate::error::{ProxError, Result};
use crate::prox::{
    capl1_scalar, check_lsp_range, indexed_soft_threshold, lsp_scalar, mcp_scalar, scad_scalar,
    soft_threshold, tnn_offset,
};
use crate::regularizer::Regularizer;

/// Vectors at least this long are processed on the rayon thread pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 14;

/// Proximal operator of a regularizer with fixed $`\lambda`$ and $`\theta`$
///
/// ```
/// use ndarray::array;
/// use ndarray_nonconvex_prox::{Proximal, Regularizer};
///
/// let prox = Proximal::new(Regularizer::CapL1, 1.0, 3.0).unwrap();
/// let x = prox.apply(array![5.0, 0.5, -2.0].view()).unwrap();
/// assert_eq!(x, array![5.0, 0.0, -1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximal<S> {
    regularizer: Regularizer,
    lambda: S,
    theta: S,
    parallel_threshold: usize,
}

impl<S: NdFloat> Proximal<S> {
    /// Checks `lambda >= 0` and the `theta` domain of `regularizer`.
    pub fn new(regularizer: Regularizer, lambda: S, theta: S) -> Result<Self> {
        if !lambda.is_finite() {
            return Err(ProxError::invalid_parameter("lambda", lambda, "must be finite"));
        }
        if lambda < S::zero() {
            return Err(ProxError::invalid_parameter(
                "lambda",
                lambda,
                "must be non-negative",
            ));
        }
        regularizer.check_theta(theta)?;
        Ok(Proximal {
            regularizer,
            lambda,
            theta,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    /// Minimum length at which `apply` runs in parallel, `usize::MAX` disables it.
    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn regularizer(&self) -> Regularizer {
        self.regularizer
    }

    pub fn lambda(&self) -> S {
        self.lambda
    }

    pub fn theta(&self) -> S {
        self.theta
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Evaluate the proximal operator at `d`
    ///
    /// Fails on an empty or non-finite input, for LSP when a magnitude does
    /// not fit single precision, and for the indexed soft-threshold when
    /// `theta - 1` exceeds `d.len()`. Nothing is returned on failure.
    pub fn apply(&self, d: ArrayView1<S>) -> Result<Array1<S>> {
        let n = d.len();
        if n == 0 {
            return Err(ProxError::InvalidDimension {
                expected: 1,
                found: 0,
            });
        }
        if let Some((index, &value)) = d.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ProxError::NonFiniteInput {
                index,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }

        let parallel = n >= self.parallel_threshold;
        trace!(
            "{} prox: n = {}, lambda = {}, theta = {}, parallel = {}",
            self.regularizer,
            n,
            self.lambda,
            self.theta,
            parallel
        );

        let (lambda, theta) = (self.lambda, self.theta);
        let x = match self.regularizer {
            Regularizer::CapL1 => {
                map_coordinates(d, parallel, |di| capl1_scalar(di, lambda, theta))
            }
            Regularizer::Lsp => {
                check_lsp_range(d)?;
                map_coordinates(d, parallel, |di| lsp_scalar(di, lambda, theta))
            }
            Regularizer::Scad => {
                map_coordinates(d, parallel, |di| scad_scalar(di, lambda, theta))
            }
            Regularizer::Mcp => map_coordinates(d, parallel, |di| mcp_scalar(di, lambda, theta)),
            Regularizer::IndexedSoftThreshold => {
                let offset = tnn_offset(theta, n)?;
                if parallel {
                    let mut x = d.to_owned();
                    x.slice_mut(s![offset..])
                        .par_mapv_inplace(|xi| soft_threshold(xi, lambda));
                    x
                } else {
                    indexed_soft_threshold(d, lambda, offset)
                }
            }
        };
        Ok(x)
    }
}

fn map_coordinates<S, F>(d: ArrayView1<S>, parallel: bool, f: F) -> Array1<S>
where
    S: NdFloat,
    F: Fn(S) -> S + Sync + Send,
{
    if parallel {
        Zip::from(d).par_map_collect(|&di| f(di))
    } else {
        Zip::from(d).map_collect(|&di| f(di))
    }
}

/// Proximal operator of `regularizer` at `d`, a vector of declared length `n`
///
/// ```math
/// x = \mathrm{arg}\!\min_x \frac12 \|x - d\|_2^2 + \sum_i r(x_i)
/// ```
///
/// Returns a freshly allocated vector of length `n`, or an error if
/// `n == 0`, `d.len() != n`, or a parameter lies outside the domain of the
/// regularizer.
pub fn compute_proximal<S: NdFloat>(
    d: ArrayView1<S>,
    n: usize,
    lambda: S,
    theta: S,
    regularizer: Regularizer,
) -> Result<Array1<S>> {
    check_dimension(d, n)?;
    Proximal::new(regularizer, lambda, theta)?.apply(d)
}

/// [`compute_proximal`] selecting the regularizer by a historical type code
///
/// See [`Regularizer::from_legacy_code`]: code 3 is the indexed
/// soft-threshold and unknown codes fall back to Capped L1.
pub fn compute_proximal_legacy<S: NdFloat>(
    d: ArrayView1<S>,
    n: usize,
    lambda: S,
    theta: S,
    code: i64,
) -> Result<Array1<S>> {
    compute_proximal(d, n, lambda, theta, Regularizer::from_legacy_code(code))
}

fn check_dimension<S>(d: ArrayView1<S>, n: usize) -> Result<()> {
    if n == 0 || d.len() != n {
        return Err(ProxError::InvalidDimension {
            expected: n,
            found: d.len(),
        });
    }
    Ok(())
}
