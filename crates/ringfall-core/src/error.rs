//! Error types for the Ringfall chain simulation.
//!
//! The only failure surface is construction: physical inputs are
//! validated once, up front, and every runtime operation is total over
//! well-formed state. There is no runtime error taxonomy.

use std::error::Error;
use std::fmt;

/// Construction-time contract violations.
///
/// Returned by chain assembly and configuration validation. Out-of-range
/// inputs fail fast here rather than producing undefined physics later.
#[derive(Clone, Debug, PartialEq)]
pub enum ChainError {
    /// The chain must have at least one ring.
    EmptyChain,
    /// dt is NaN, infinite, zero, negative, or so small its reciprocal
    /// is not finite.
    InvalidDt {
        /// The invalid value.
        value: f64,
    },
    /// Radius is NaN, infinite, zero, or negative.
    InvalidRadius {
        /// The invalid value.
        value: f64,
    },
    /// Drive acceleration is NaN or infinite.
    InvalidDrive {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChain => write!(f, "chain must have at least one ring"),
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidRadius { value } => {
                write!(f, "radius must be finite and positive, got {value}")
            }
            Self::InvalidDrive { value } => {
                write!(f, "drive must be finite, got {value}")
            }
        }
    }
}

impl Error for ChainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_value() {
        let err = ChainError::InvalidDt { value: -0.5 };
        let msg = format!("{err}");
        assert!(msg.contains("dt"));
        assert!(msg.contains("-0.5"));
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn Error> = Box::new(ChainError::EmptyChain);
        assert!(err.source().is_none());
    }
}
