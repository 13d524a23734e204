//! Study configuration: which conditions to run and how.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ITERATIONS, DEFAULT_MAX_ATTEMPTS, DEFAULT_SAMPLE_SIZES};
use crate::types::DegeneratePolicy;

/// Configuration for the Monte Carlo recovery loop.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StudyConfig {
    /// Sample sizes to evaluate, in run order. Default: [10, 40, 4000].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sample_sizes: Vec<u32>,
    /// Iterations per condition. Default: 1000.
    pub iterations: Option<u32>,
    /// Base seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Run conditions on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// `"exclude"` or `"resample"`. Default: exclude.
    pub degenerate_policy: Option<String>,
    /// Draw budget under `resample`. Default: 10.
    pub max_attempts: Option<u32>,
}

impl StudyConfig {
    /// Returns the configured sample sizes, defaulting to [10, 40, 4000].
    pub fn effective_sample_sizes(&self) -> Vec<u32> {
        if self.sample_sizes.is_empty() {
            DEFAULT_SAMPLE_SIZES.to_vec()
        } else {
            self.sample_sizes.clone()
        }
    }

    /// Returns the effective iteration count, defaulting to 1000.
    pub fn effective_iterations(&self) -> u32 {
        self.iterations.unwrap_or(DEFAULT_ITERATIONS)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Returns the degenerate-draw policy. Unknown names fall back to
    /// exclusion; `EzDiffConfig::validate` rejects them first.
    pub fn effective_degenerate_policy(&self) -> DegeneratePolicy {
        let attempts = self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        self.degenerate_policy
            .as_deref()
            .and_then(|name| DegeneratePolicy::from_name(name, attempts))
            .unwrap_or_default()
    }
}
