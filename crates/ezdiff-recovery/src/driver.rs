//! Recovery driver: the Monte Carlo loop for one sample size.

use ezdiff_core::{
    DegeneratePolicy, DegenerateReason, EzDiffConfig, LatentParameters, ParameterVector,
    RecoveredParameters, RecoveryError,
};
use ezdiff_model::{predict, InverseModel, ObservationSampler, ParameterGenerator};
use rand::Rng;

use crate::accumulator::RecoveryAccumulator;
use crate::summary::ConditionSummary;

/// Result of one generate → predict → sample → invert pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationOutcome {
    Recovered {
        truth: LatentParameters,
        estimate: RecoveredParameters,
        /// Observation draws used, 1 unless the policy resampled.
        attempts: u32,
    },
    Degenerate {
        truth: LatentParameters,
        reason: DegenerateReason,
        attempts: u32,
    },
}

impl IterationOutcome {
    /// Recovered − true, if the iteration produced an estimate.
    pub fn bias(&self) -> Option<ParameterVector> {
        match self {
            Self::Recovered {
                truth, estimate, ..
            } => Some(estimate.bias(truth)),
            Self::Degenerate { .. } => None,
        }
    }
}

/// Composes generator, forward model, sampler, and inverse model.
#[derive(Debug, Clone, Default)]
pub struct RecoveryDriver {
    generator: ParameterGenerator,
    inverse: InverseModel,
    policy: DegeneratePolicy,
}

impl RecoveryDriver {
    pub fn new(
        generator: ParameterGenerator,
        inverse: InverseModel,
        policy: DegeneratePolicy,
    ) -> Self {
        Self {
            generator,
            inverse,
            policy,
        }
    }

    /// Build from the `[model]` and `[study]` sections.
    pub fn from_config(config: &EzDiffConfig) -> Result<Self, RecoveryError> {
        let generator = ParameterGenerator::new(config.model.effective_ranges())?;
        let inverse = InverseModel::new(
            config.model.effective_clamp_epsilon(),
            config.model.effective_edge_correction(),
        );
        Ok(Self::new(
            generator,
            inverse,
            config.study.effective_degenerate_policy(),
        ))
    }

    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DegeneratePolicy {
        self.policy
    }

    /// One iteration with fresh true parameters.
    pub fn run_iteration<R: Rng + ?Sized>(
        &self,
        sampler: &ObservationSampler,
        rng: &mut R,
    ) -> Result<IterationOutcome, RecoveryError> {
        let truth = self.generator.generate(rng);
        let predicted = predict(&truth);

        let max_attempts = self.policy.attempts();
        let mut last_reason = DegenerateReason::NonFiniteInput;
        for attempt in 1..=max_attempts {
            let observed = sampler.sample(&predicted, rng)?;
            match self.inverse.recover(&observed) {
                Ok(estimate) => {
                    return Ok(IterationOutcome::Recovered {
                        truth,
                        estimate,
                        attempts: attempt,
                    })
                }
                Err(err) => {
                    tracing::debug!(
                        sample_size = sampler.trial_count(),
                        attempt,
                        error = %err,
                        "degenerate inversion"
                    );
                    last_reason = err.reason();
                }
            }
        }

        Ok(IterationOutcome::Degenerate {
            truth,
            reason: last_reason,
            attempts: max_attempts,
        })
    }

    /// Run `iterations` iterations at sample size `sample_size` and reduce
    /// them to mean bias and mean squared error.
    ///
    /// Degenerate iterations are tallied and left out of the means; they
    /// never abort the batch. A condition with no valid iteration still
    /// yields a summary, with undefined means.
    pub fn run<R: Rng + ?Sized>(
        &self,
        sample_size: u32,
        iterations: u32,
        rng: &mut R,
    ) -> Result<ConditionSummary, RecoveryError> {
        let acc = self.accumulate(sample_size, iterations, rng)?;
        let summary = ConditionSummary::from_accumulator(sample_size, iterations, &acc);
        if !summary.has_estimates() {
            tracing::warn!(
                sample_size,
                iterations,
                "every iteration was degenerate; biases left undefined"
            );
        }
        tracing::info!(
            sample_size,
            valid = summary.valid_iterations,
            degenerate = summary.degenerate_iterations,
            "condition complete"
        );
        Ok(summary)
    }

    /// The loop behind [`run`](Self::run), returning the raw accumulator.
    pub fn accumulate<R: Rng + ?Sized>(
        &self,
        sample_size: u32,
        iterations: u32,
        rng: &mut R,
    ) -> Result<RecoveryAccumulator, RecoveryError> {
        if iterations == 0 {
            return Err(RecoveryError::NoIterations);
        }
        let sampler = ObservationSampler::new(sample_size)?;
        let span = tracing::info_span!("condition", sample_size, iterations);
        let _guard = span.enter();

        let mut acc = RecoveryAccumulator::new();
        for _ in 0..iterations {
            let outcome = self.run_iteration(&sampler, rng)?;
            match outcome {
                IterationOutcome::Recovered {
                    truth,
                    estimate,
                    attempts,
                } => {
                    acc.record(estimate.bias(&truth));
                    (1..attempts).for_each(|_| acc.record_redraw());
                }
                IterationOutcome::Degenerate {
                    reason, attempts, ..
                } => {
                    acc.record_degenerate(reason);
                    (1..attempts).for_each(|_| acc.record_redraw());
                }
            }
        }
        Ok(acc)
    }
}
