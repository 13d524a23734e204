//! Parameter generator.

use ezdiff_core::{ConfigError, LatentParameters, ParameterRanges};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Draws each latent parameter independently from its uniform range.
#[derive(Debug, Clone)]
pub struct ParameterGenerator {
    boundary: Uniform<f64>,
    drift: Uniform<f64>,
    nondecision: Uniform<f64>,
}

impl ParameterGenerator {
    pub fn new(ranges: ParameterRanges) -> Result<Self, ConfigError> {
        ranges.validate()?;
        Ok(Self::from_valid(ranges))
    }

    fn from_valid(ranges: ParameterRanges) -> Self {
        Self {
            boundary: Uniform::new(ranges.boundary.low, ranges.boundary.high),
            drift: Uniform::new(ranges.drift.low, ranges.drift.high),
            nondecision: Uniform::new(ranges.nondecision.low, ranges.nondecision.high),
        }
    }

    /// One fresh parameter set. Draw order is boundary, drift, nondecision.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> LatentParameters {
        let boundary = self.boundary.sample(rng);
        let drift = self.drift.sample(rng);
        let nondecision = self.nondecision.sample(rng);
        LatentParameters::new(boundary, drift, nondecision)
    }
}

impl Default for ParameterGenerator {
    fn default() -> Self {
        Self::from_valid(ParameterRanges::default())
    }
}
