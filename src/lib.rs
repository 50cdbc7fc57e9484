//! The `ndarray-nonconvex-prox` crate provides the proximal operators of
//! non-convex, sparsity-inducing regularizers for `ndarray` vectors.
//!
//! For a vector $`d`$ it computes
//! ```math
//! x = \mathrm{arg}\!\min_x \frac12 \|x - d\|_2^2 + \sum_i r(x_i)
//! ```
//! in closed form, for $`r`$ one of:
//! - Capped L1
//! - Log-Sum Penalty (LSP)
//! - Smoothly Clipped Absolute Deviation (SCAD)
//! - Minimax Concave Penalty (MCP)
//! - the indexed soft-threshold of historical GIST front ends
//!
//! These are the $`g`$-steps of proximal gradient methods for non-convex
//! regularized regression, such as GIST. The iterative solver itself is
//! not part of this crate; the operators plug into any method that accepts
//! a proximal map `Fn(ArrayView1<S>, S) -> Array1<S>`.
//!
//! ```
//! use ndarray::array;
//! use ndarray_nonconvex_prox::{compute_proximal, Regularizer};
//!
//! let d = array![10.0, -0.5, 1.5];
//! let x = compute_proximal(d.view(), 3, 1.0, 2.0, Regularizer::Mcp).unwrap();
//! assert_eq!(x, array![10.0, 0.0, 1.0]);
//! ```
//!
//! All parameters are validated and errors are returned as [`ProxError`].
//! The crate logs through the `log` facade and never installs a logger.

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

mod error;
pub use error::{ProxError, Result};

pub mod params;
pub use params::{compute_proximal, compute_proximal_legacy, Proximal};

pub mod prox;

mod regularizer;
pub use regularizer::Regularizer;
