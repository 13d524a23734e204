//! Latent parameters, recovered estimates, and the canonical parameter vector.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::{
    BOUNDARY_MAX, BOUNDARY_MIN, DRIFT_MAX, DRIFT_MIN, NONDECISION_MAX, NONDECISION_MIN,
    PARAMETER_COUNT,
};
use crate::errors::ConfigError;

/// True parameters of the diffusion process for one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatentParameters {
    /// Boundary separation `a`.
    pub boundary: f64,
    /// Drift rate `ν`.
    pub drift: f64,
    /// Nondecision time `τ` in seconds.
    pub nondecision: f64,
}

impl LatentParameters {
    pub fn new(boundary: f64, drift: f64, nondecision: f64) -> Self {
        Self {
            boundary,
            drift,
            nondecision,
        }
    }

    pub fn as_vector(&self) -> ParameterVector {
        ParameterVector::new(self.drift, self.boundary, self.nondecision)
    }
}

/// Estimates produced by a successful inversion. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveredParameters {
    pub boundary: f64,
    pub drift: f64,
    pub nondecision: f64,
}

impl RecoveredParameters {
    pub fn as_vector(&self) -> ParameterVector {
        ParameterVector::new(self.drift, self.boundary, self.nondecision)
    }

    /// Elementwise `recovered - truth`, in canonical order.
    pub fn bias(&self, truth: &LatentParameters) -> ParameterVector {
        self.as_vector() - truth.as_vector()
    }
}

/// A triple in the fixed order (drift, boundary, nondecision).
///
/// Every bias and squared-error triple in the workspace uses this ordering.
/// Serializes as a 3-element array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct ParameterVector {
    pub drift: f64,
    pub boundary: f64,
    pub nondecision: f64,
}

impl ParameterVector {
    pub const ZERO: Self = Self {
        drift: 0.0,
        boundary: 0.0,
        nondecision: 0.0,
    };

    pub fn new(drift: f64, boundary: f64, nondecision: f64) -> Self {
        Self {
            drift,
            boundary,
            nondecision,
        }
    }

    pub fn to_array(self) -> [f64; PARAMETER_COUNT] {
        [self.drift, self.boundary, self.nondecision]
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.drift), f(self.boundary), f(self.nondecision))
    }

    /// Componentwise combination of two vectors.
    pub fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.drift, other.drift),
            f(self.boundary, other.boundary),
            f(self.nondecision, other.nondecision),
        )
    }

    pub fn squared(self) -> Self {
        self.map(|x| x * x)
    }

    pub fn scale(self, factor: f64) -> Self {
        self.map(|x| x * factor)
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|x| x.is_finite())
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.to_array().iter().fold(0.0_f64, |m, x| m.max(x.abs()))
    }
}

impl From<[f64; PARAMETER_COUNT]> for ParameterVector {
    fn from(v: [f64; PARAMETER_COUNT]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<ParameterVector> for [f64; PARAMETER_COUNT] {
    fn from(v: ParameterVector) -> Self {
        v.to_array()
    }
}

impl Add for ParameterVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for ParameterVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

/// Half-open uniform range `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub low: f64,
    pub high: f64,
}

impl UniformRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..self.high).contains(&value)
    }

    fn validate(&self, field: &str, strictly_positive: bool) -> Result<(), ConfigError> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low >= self.high {
            return Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: format!("low ({}) must be below high ({})", self.low, self.high),
            });
        }
        let floor_ok = if strictly_positive {
            self.low > 0.0
        } else {
            self.low >= 0.0
        };
        if !floor_ok {
            return Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: format!("low bound {} is out of domain", self.low),
            });
        }
        Ok(())
    }
}

/// Uniform ranges the parameter generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRanges {
    pub boundary: UniformRange,
    pub drift: UniformRange,
    pub nondecision: UniformRange,
}

impl ParameterRanges {
    /// Boundary and drift must stay positive so the forward model is defined;
    /// nondecision time may start at zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.boundary.validate("model.boundary_range", true)?;
        self.drift.validate("model.drift_range", true)?;
        self.nondecision.validate("model.nondecision_range", false)?;
        Ok(())
    }

    pub fn contains(&self, params: &LatentParameters) -> bool {
        self.boundary.contains(params.boundary)
            && self.drift.contains(params.drift)
            && self.nondecision.contains(params.nondecision)
    }
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            boundary: UniformRange::new(BOUNDARY_MIN, BOUNDARY_MAX),
            drift: UniformRange::new(DRIFT_MIN, DRIFT_MAX),
            nondecision: UniformRange::new(NONDECISION_MIN, NONDECISION_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_order_is_drift_boundary_nondecision() {
        let params = LatentParameters::new(1.2, 1.5, 0.3);
        assert_eq!(params.as_vector().to_array(), [1.5, 1.2, 0.3]);
    }

    #[test]
    fn test_bias_is_recovered_minus_true() {
        let truth = LatentParameters::new(1.0, 1.0, 0.2);
        let est = RecoveredParameters {
            boundary: 1.5,
            drift: 0.75,
            nondecision: 0.2,
        };
        let bias = est.bias(&truth);
        assert_eq!(bias, ParameterVector::new(-0.25, 0.5, 0.0));
        assert_eq!(bias.squared(), ParameterVector::new(0.0625, 0.25, 0.0));
    }

    #[test]
    fn test_vector_serializes_as_array() {
        let v = ParameterVector::new(0.1, -0.2, 0.3);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[0.1,-0.2,0.3]");
        let back: ParameterVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_default_ranges_validate() {
        assert!(ParameterRanges::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut ranges = ParameterRanges::default();
        ranges.drift = UniformRange::new(2.0, 0.5);
        assert!(matches!(
            ranges.validate(),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_zero_boundary_floor_rejected() {
        let mut ranges = ParameterRanges::default();
        ranges.boundary = UniformRange::new(0.0, 1.0);
        assert!(ranges.validate().is_err());
        ranges.boundary = UniformRange::new(0.5, 2.0);
        ranges.nondecision = UniformRange::new(0.0, 0.5);
        assert!(ranges.validate().is_ok());
    }
}
