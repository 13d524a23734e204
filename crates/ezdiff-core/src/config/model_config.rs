//! Model configuration: parameter ranges and inversion settings.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CLAMP_EPSILON;
use crate::types::{EdgeCorrection, ParameterRanges, UniformRange};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    /// Distance kept from 0 and 1 when clamping the accuracy rate. Default: 1e-6.
    pub clamp_epsilon: Option<f64>,
    /// `"clamp"` or `"half_trial"`. Default: clamp.
    pub edge_correction: Option<String>,
    pub boundary_range: Option<UniformRange>,
    pub drift_range: Option<UniformRange>,
    pub nondecision_range: Option<UniformRange>,
}

impl ModelConfig {
    pub fn effective_clamp_epsilon(&self) -> f64 {
        self.clamp_epsilon.unwrap_or(DEFAULT_CLAMP_EPSILON)
    }

    pub fn effective_edge_correction(&self) -> EdgeCorrection {
        self.edge_correction
            .as_deref()
            .and_then(EdgeCorrection::from_name)
            .unwrap_or_default()
    }

    /// Default ranges with any configured overrides applied.
    pub fn effective_ranges(&self) -> ParameterRanges {
        let defaults = ParameterRanges::default();
        ParameterRanges {
            boundary: self.boundary_range.unwrap_or(defaults.boundary),
            drift: self.drift_range.unwrap_or(defaults.drift),
            nondecision: self.nondecision_range.unwrap_or(defaults.nondecision),
        }
    }
}
