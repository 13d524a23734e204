//! Summary statistics of a block of response-time trials.

use serde::{Deserialize, Serialize};

/// Population statistics implied by a set of latent parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedStatistics {
    /// Probability of hitting the correct boundary, in (0, 1).
    pub accuracy_rate: f64,
    /// Mean response time; strictly exceeds the nondecision time.
    pub mean_rt: f64,
    /// Response-time variance, strictly positive.
    pub rt_variance: f64,
}

/// Statistics of one finite sample of `trial_count` trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedStatistics {
    /// `correct_count / trial_count`, in [0, 1].
    pub accuracy_rate: f64,
    pub mean_rt: f64,
    pub rt_variance: f64,
    pub correct_count: u32,
    pub trial_count: u32,
}

impl ObservedStatistics {
    /// Treat population statistics as if they had been observed exactly.
    ///
    /// Used to check the inverse model without sampling noise.
    pub fn noiseless(predicted: &PredictedStatistics, trial_count: u32) -> Self {
        let correct = (predicted.accuracy_rate * trial_count as f64).round();
        Self {
            accuracy_rate: predicted.accuracy_rate,
            mean_rt: predicted.mean_rt,
            rt_variance: predicted.rt_variance,
            correct_count: correct.clamp(0.0, trial_count as f64) as u32,
            trial_count,
        }
    }
}
