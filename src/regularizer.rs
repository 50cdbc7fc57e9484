//! Regularizer selection

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use log::warn;
use ndarray::NdFloat;

use crate::error::{ProxError, Result};

/// The penalty whose proximal operator is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regularizer {
    /// $`\lambda \min(|x|, \theta)`$, type code 1
    CapL1,
    /// $`\lambda \log(1 + |x|/\theta)`$, type code 2
    Lsp,
    /// Smoothly Clipped Absolute Deviation, type code 3
    Scad,
    /// Minimax Concave Penalty, type code 4
    Mcp,
    /// Soft-threshold of the indices `theta - 1..`, the historical type 3.
    /// Only reachable through [`Regularizer::from_legacy_code`] or by name.
    IndexedSoftThreshold,
}

impl Regularizer {
    /// Type code of the regularizer, `None` for [`Regularizer::IndexedSoftThreshold`].
    pub fn code(self) -> Option<i64> {
        match self {
            Regularizer::CapL1 => Some(1),
            Regularizer::Lsp => Some(2),
            Regularizer::Scad => Some(3),
            Regularizer::Mcp => Some(4),
            Regularizer::IndexedSoftThreshold => None,
        }
    }

    /// Map a type code the way historical callers expect
    ///
    /// Code 3 selects the indexed soft-threshold and every unrecognized code
    /// falls back to Capped L1.
    pub fn from_legacy_code(code: i64) -> Self {
        match code {
            1 => Regularizer::CapL1,
            2 => Regularizer::Lsp,
            3 => Regularizer::IndexedSoftThreshold,
            4 => Regularizer::Mcp,
            _ => {
                warn!("unknown regularizer code {}, falling back to capped L1", code);
                Regularizer::CapL1
            }
        }
    }

    /// Short name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Regularizer::CapL1 => "capl1",
            Regularizer::Lsp => "lsp",
            Regularizer::Scad => "scad",
            Regularizer::Mcp => "mcp",
            Regularizer::IndexedSoftThreshold => "tnn",
        }
    }

    /// Check `theta` against the domain of the penalty.
    ///
    /// For the indexed soft-threshold only finiteness and `theta >= 1` can be
    /// checked without the vector length.
    pub fn check_theta<S: NdFloat>(self, theta: S) -> Result<()> {
        if !theta.is_finite() {
            return Err(ProxError::invalid_parameter("theta", theta, "must be finite"));
        }
        let two = S::one() + S::one();
        match self {
            Regularizer::CapL1 | Regularizer::Lsp | Regularizer::Mcp if theta <= S::zero() => Err(
                ProxError::invalid_parameter("theta", theta, "must be positive"),
            ),
            Regularizer::Scad if theta <= two => Err(ProxError::invalid_parameter(
                "theta",
                theta,
                "must be greater than 2 for SCAD",
            )),
            Regularizer::IndexedSoftThreshold if theta < S::one() => {
                Err(ProxError::invalid_parameter(
                    "theta",
                    theta,
                    "cutoff theta - 1 must be non-negative",
                ))
            }
            _ => Ok(()),
        }
    }
}

impl TryFrom<i64> for Regularizer {
    type Error = ProxError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Regularizer::CapL1),
            2 => Ok(Regularizer::Lsp),
            3 => Ok(Regularizer::Scad),
            4 => Ok(Regularizer::Mcp),
            _ => Err(ProxError::UnknownRegularizerCode(code)),
        }
    }
}

impl FromStr for Regularizer {
    type Err = ProxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "capl1" | "capped-l1" | "capped_l1" => Ok(Regularizer::CapL1),
            "lsp" | "log-sum" | "log_sum" => Ok(Regularizer::Lsp),
            "scad" => Ok(Regularizer::Scad),
            "mcp" => Ok(Regularizer::Mcp),
            "tnn" | "indexed-soft-threshold" | "indexed_soft_threshold" => {
                Ok(Regularizer::IndexedSoftThreshold)
            }
            _ => Err(ProxError::UnknownRegularizerName(s.to_string())),
        }
    }
}

impl fmt::Display for Regularizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_codes() {
        assert_eq!(Regularizer::try_from(1).unwrap(), Regularizer::CapL1);
        assert_eq!(Regularizer::try_from(2).unwrap(), Regularizer::Lsp);
        assert_eq!(Regularizer::try_from(3).unwrap(), Regularizer::Scad);
        assert_eq!(Regularizer::try_from(4).unwrap(), Regularizer::Mcp);
        assert_eq!(
            Regularizer::try_from(0),
            Err(ProxError::UnknownRegularizerCode(0))
        );
        assert!(Regularizer::try_from(5).is_err());
        assert!(Regularizer::try_from(-1).is_err());
    }

    #[test]
    fn legacy_codes() {
        assert_eq!(Regularizer::from_legacy_code(1), Regularizer::CapL1);
        assert_eq!(Regularizer::from_legacy_code(2), Regularizer::Lsp);
        assert_eq!(
            Regularizer::from_legacy_code(3),
            Regularizer::IndexedSoftThreshold
        );
        assert_eq!(Regularizer::from_legacy_code(4), Regularizer::Mcp);
        assert_eq!(Regularizer::from_legacy_code(0), Regularizer::CapL1);
        assert_eq!(Regularizer::from_legacy_code(17), Regularizer::CapL1);
    }

    #[test]
    fn codes_round_trip() {
        for &code in [1, 2, 3, 4].iter() {
            assert_eq!(Regularizer::try_from(code).unwrap().code(), Some(code));
        }
        assert_eq!(Regularizer::IndexedSoftThreshold.code(), None);
    }

    #[test]
    fn parse_names() {
        assert_eq!("capl1".parse::<Regularizer>().unwrap(), Regularizer::CapL1);
        assert_eq!(" LSP ".parse::<Regularizer>().unwrap(), Regularizer::Lsp);
        assert_eq!("Scad".parse::<Regularizer>().unwrap(), Regularizer::Scad);
        assert_eq!("mcp".parse::<Regularizer>().unwrap(), Regularizer::Mcp);
        assert_eq!(
            "indexed-soft-threshold".parse::<Regularizer>().unwrap(),
            Regularizer::IndexedSoftThreshold
        );
        assert_eq!(
            "lasso".parse::<Regularizer>(),
            Err(ProxError::UnknownRegularizerName("lasso".to_string()))
        );
        assert_eq!(Regularizer::IndexedSoftThreshold.to_string(), "tnn");
    }

    #[test]
    fn theta_domains() {
        assert!(Regularizer::CapL1.check_theta(1e-3).is_ok());
        assert!(Regularizer::CapL1.check_theta(0.0).is_err());
        assert!(Regularizer::Lsp.check_theta(-1.0).is_err());
        assert!(Regularizer::Mcp.check_theta(1.0).is_ok());
        assert!(Regularizer::Scad.check_theta(2.0).is_err());
        assert!(Regularizer::Scad.check_theta(3.7).is_ok());
        assert!(Regularizer::IndexedSoftThreshold.check_theta(1.0).is_ok());
        assert!(Regularizer::IndexedSoftThreshold.check_theta(0.5).is_err());
        assert!(Regularizer::Mcp.check_theta(f64::NAN).is_err());
        assert!(Regularizer::CapL1.check_theta(f64::INFINITY).is_err());
    }
}
