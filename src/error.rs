//! Errors reported by the proximal operators

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ProxError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProxError {
    /// The declared dimension is zero or does not match the input length.
    #[error("invalid dimension: expected {expected} coordinates, found {found}")]
    InvalidDimension { expected: usize, found: usize },

    /// A scalar parameter lies outside the domain of the chosen regularizer.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The input vector holds a NaN or an infinity.
    #[error("non-finite input at index {index}: {value}")]
    NonFiniteInput { index: usize, value: f64 },

    /// The input vector holds a finite value the chosen regularizer cannot
    /// represent, such as an LSP magnitude beyond the `f32` range.
    #[error("input at index {index} out of range: {value}")]
    InputOutOfRange { index: usize, value: f64 },

    /// Integer type code outside of 1..=4.
    #[error("unknown regularizer code {0}")]
    UnknownRegularizerCode(i64),

    /// Unrecognized regularizer name.
    #[error("unknown regularizer name {0:?}")]
    UnknownRegularizerName(String),
}

impl ProxError {
    pub(crate) fn invalid_parameter<S: num_traits::ToPrimitive>(
        name: &'static str,
        value: S,
        reason: &'static str,
    ) -> Self {
        ProxError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
            reason,
        }
    }
}
