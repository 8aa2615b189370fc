//! World configuration and validation.
//!
//! [`ChainConfig`] is the construction input for a
//! [`ChainWorld`](crate::ChainWorld). All physical parameters are
//! checked once at construction; after that, no runtime operation can
//! fail.

use ringfall_core::{ChainError, DEFAULT_DT, DEFAULT_RADIUS};

/// Complete configuration for constructing a chain world.
///
/// The defaults reproduce the reference scenario: a ten-ring chain with
/// the driven ring accelerated at ten gravities.
///
/// # Examples
///
/// ```
/// use ringfall_engine::ChainConfig;
///
/// let config = ChainConfig {
///     links: 3,
///     drive: 5.0,
///     ..ChainConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfig {
    /// Number of rings, at least 1. Index `links - 1` is the driven
    /// ring.
    pub links: usize,
    /// Driven ring self-acceleration, in units of gravity magnitude.
    pub drive: f64,
    /// Shared ring radius.
    pub radius: f64,
    /// Integration timestep in seconds, fixed for the run.
    pub dt: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            links: 10,
            drive: 10.0,
            radius: DEFAULT_RADIUS,
            dt: DEFAULT_DT,
        }
    }
}

impl ChainConfig {
    /// Validate all construction-time invariants.
    ///
    /// `dt` must be finite and positive, and its reciprocal must also be
    /// finite (rejects subnormals for which `1.0 / dt` is infinite and
    /// would break a driver's ticks-per-second arithmetic).
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.links == 0 {
            return Err(ChainError::EmptyChain);
        }
        if !self.dt.is_finite() || self.dt <= 0.0 || !(1.0 / self.dt).is_finite() {
            return Err(ChainError::InvalidDt { value: self.dt });
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChainError::InvalidRadius { value: self.radius });
        }
        if !self.drive.is_finite() {
            return Err(ChainError::InvalidDrive { value: self.drive });
        }
        Ok(())
    }
}
