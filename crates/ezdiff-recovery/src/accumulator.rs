//! Running sums for one sample-size condition.

use std::collections::BTreeMap;

use ezdiff_core::{DegenerateReason, ParameterVector};

/// Accumulates scored iterations without storing them.
///
/// Mean bias and its spread use Welford's update; squared error is a
/// plain running sum.
#[derive(Debug, Clone, Default)]
pub struct RecoveryAccumulator {
    valid: u32,
    mean_bias: ParameterVector,
    m2: ParameterVector,
    sum_squared_error: ParameterVector,
    degenerate: BTreeMap<DegenerateReason, u32>,
    redraws: u32,
}

impl RecoveryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one scored iteration. `bias` is recovered − true.
    pub fn record(&mut self, bias: ParameterVector) {
        self.valid += 1;
        let n = self.valid as f64;
        let delta = bias - self.mean_bias;
        self.mean_bias = self.mean_bias + delta.scale(1.0 / n);
        let delta_after = bias - self.mean_bias;
        self.m2 = self.m2 + delta.zip_with(delta_after, |a, b| a * b);
        self.sum_squared_error = self.sum_squared_error + bias.squared();
    }

    /// Count an iteration that produced no estimate.
    pub fn record_degenerate(&mut self, reason: DegenerateReason) {
        *self.degenerate.entry(reason).or_insert(0) += 1;
    }

    /// Count an extra observation draw made under the resample policy.
    pub fn record_redraw(&mut self) {
        self.redraws += 1;
    }

    pub fn valid_iterations(&self) -> u32 {
        self.valid
    }

    pub fn degenerate_iterations(&self) -> u32 {
        self.degenerate.values().sum()
    }

    pub fn degenerate_by_reason(&self) -> &BTreeMap<DegenerateReason, u32> {
        &self.degenerate
    }

    pub fn redraws(&self) -> u32 {
        self.redraws
    }

    /// Mean bias over valid iterations, `None` before the first.
    pub fn mean_bias(&self) -> Option<ParameterVector> {
        (self.valid > 0).then_some(self.mean_bias)
    }

    pub fn mean_squared_error(&self) -> Option<ParameterVector> {
        (self.valid > 0).then(|| self.sum_squared_error.scale(1.0 / self.valid as f64))
    }

    /// Sample variance of the bias; needs two valid iterations.
    pub fn bias_variance(&self) -> Option<ParameterVector> {
        (self.valid > 1).then(|| self.m2.scale(1.0 / (self.valid - 1) as f64))
    }
}
