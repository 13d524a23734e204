//! Finalized statistics for one sample-size condition.

use std::collections::BTreeMap;

use ezdiff_core::constants::BIAS_CI_LEVEL;
use ezdiff_core::{DegenerateReason, ParameterVector};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::accumulator::RecoveryAccumulator;

/// Two-sided interval on the mean bias, per component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasInterval {
    pub lower: ParameterVector,
    pub upper: ParameterVector,
}

/// Mean-reduced result of one condition. All vectors are ordered
/// (drift, boundary, nondecision).
///
/// `biases` and `squared_errors` are `null` when every iteration was
/// degenerate; the counts and reasons are still reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub sample_size: u32,
    pub iterations: u32,
    pub valid_iterations: u32,
    pub degenerate_iterations: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub degenerate_reasons: BTreeMap<DegenerateReason, u32>,
    #[serde(default)]
    pub redraws: u32,
    /// Mean of recovered − true.
    pub biases: Option<ParameterVector>,
    /// Mean of (recovered − true)².
    pub squared_errors: Option<ParameterVector>,
    /// Standard error of the mean bias; absent with fewer than two valid iterations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_std_errors: Option<ParameterVector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_ci95: Option<BiasInterval>,
    /// Seed and stream that reproduce this condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<u64>,
}

impl ConditionSummary {
    /// Reduce an accumulator.
    pub fn from_accumulator(sample_size: u32, iterations: u32, acc: &RecoveryAccumulator) -> Self {
        let biases = acc.mean_bias();
        let valid = acc.valid_iterations();
        let bias_std_errors = acc
            .bias_variance()
            .map(|var| var.map(|s2| (s2 / valid as f64).sqrt()));
        let bias_ci95 = biases
            .zip(bias_std_errors)
            .and_then(|(mean, se)| t_interval(mean, se, valid));

        Self {
            sample_size,
            iterations,
            valid_iterations: valid,
            degenerate_iterations: acc.degenerate_iterations(),
            degenerate_reasons: acc.degenerate_by_reason().clone(),
            redraws: acc.redraws(),
            biases,
            squared_errors: acc.mean_squared_error(),
            bias_std_errors,
            bias_ci95,
            seed: None,
            stream: None,
        }
    }

    /// False when no iteration produced an estimate.
    pub fn has_estimates(&self) -> bool {
        self.valid_iterations > 0
    }

    /// Share of iterations that produced no estimate.
    pub fn degenerate_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.degenerate_iterations as f64 / self.iterations as f64
        }
    }
}

/// Student-t interval `mean ± t(1 − α/2, n − 1) · se`.
fn t_interval(mean: ParameterVector, se: ParameterVector, n: u32) -> Option<BiasInterval> {
    if n < 2 {
        return None;
    }
    let dist = StudentsT::new(0.0, 1.0, (n - 1) as f64).ok()?;
    let t = dist.inverse_cdf(1.0 - (1.0 - BIAS_CI_LEVEL) / 2.0);
    if !t.is_finite() {
        return None;
    }
    let half = se.scale(t);
    Some(BiasInterval {
        lower: mean - half,
        upper: mean + half,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_degenerate_keeps_counts() {
        let mut acc = RecoveryAccumulator::new();
        acc.record_degenerate(DegenerateReason::NonPositiveVariance);
        acc.record_degenerate(DegenerateReason::ZeroDrift);
        let summary = ConditionSummary::from_accumulator(2, 2, &acc);
        assert!(!summary.has_estimates());
        assert!(summary.biases.is_none());
        assert!(summary.squared_errors.is_none());
        assert!(summary.bias_ci95.is_none());
        assert_eq!(summary.degenerate_iterations, 2);
        assert_eq!(summary.degenerate_reasons[&DegenerateReason::ZeroDrift], 1);
        assert_eq!(summary.degenerate_rate(), 1.0);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["biases"].is_null());
        assert!(json["squared_errors"].is_null());
    }

    #[test]
    fn test_single_iteration_has_no_interval() {
        let mut acc = RecoveryAccumulator::new();
        acc.record(ParameterVector::new(0.1, 0.2, 0.3));
        let summary = ConditionSummary::from_accumulator(10, 1, &acc);
        assert_eq!(summary.biases, Some(ParameterVector::new(0.1, 0.2, 0.3)));
        assert!(summary.bias_std_errors.is_none());
        assert!(summary.bias_ci95.is_none());
    }

    #[test]
    fn test_interval_brackets_mean() {
        let mut acc = RecoveryAccumulator::new();
        for i in 0..50 {
            let x = (i as f64 - 24.5) / 10.0;
            acc.record(ParameterVector::new(x, -x, 0.5 * x));
        }
        let summary = ConditionSummary::from_accumulator(40, 50, &acc);
        let ci = summary.bias_ci95.unwrap();
        let mean = summary.biases.unwrap();
        for (lo, (m, hi)) in ci.lower.to_array().iter().zip(
            mean.to_array()
                .iter()
                .zip(ci.upper.to_array().iter()),
        ) {
            assert!(lo < m && m < hi);
            assert!(*lo <= 0.0 && 0.0 <= *hi);
        }
    }

    #[test]
    fn test_t_quantile_matches_table() {
        // t(0.975, 9) = 2.262
        let mean = ParameterVector::ZERO;
        let se = ParameterVector::new(1.0, 1.0, 1.0);
        let ci = t_interval(mean, se, 10).unwrap();
        assert!((ci.upper.drift - 2.262).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_rate() {
        let mut acc = RecoveryAccumulator::new();
        acc.record(ParameterVector::ZERO);
        acc.record(ParameterVector::ZERO);
        acc.record(ParameterVector::ZERO);
        acc.record_degenerate(DegenerateReason::ZeroDrift);
        let summary = ConditionSummary::from_accumulator(10, 4, &acc);
        assert_eq!(summary.degenerate_rate(), 0.25);
    }
}
