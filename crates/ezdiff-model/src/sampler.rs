//! Observation sampler: predicted statistics to one finite-sample draw.
//!
//! For N trials:
//!   correct ~ Binomial(N, R),               R_obs = correct / N
//!   M_obs   ~ Normal(M, sqrt(V / N))
//!   V_obs   ~ Gamma(shape = (N − 1) / 2, scale = 2V / (N − 1))
//!
//! The gamma is the sampling distribution of a normal-theory variance
//! estimate, so `E[V_obs] = V`.

use ezdiff_core::constants::MIN_SAMPLE_SIZE;
use ezdiff_core::{ObservedStatistics, PredictedStatistics, SamplingError};
use rand::Rng;
use rand_distr::{Binomial, Distribution, Gamma, Normal};

/// Sampler bound to one sample size.
#[derive(Debug, Clone, Copy)]
pub struct ObservationSampler {
    trial_count: u32,
}

impl ObservationSampler {
    /// Rejects `trial_count < 2`: the gamma shape would not be positive.
    pub fn new(trial_count: u32) -> Result<Self, SamplingError> {
        if trial_count < MIN_SAMPLE_SIZE {
            return Err(SamplingError::InsufficientTrials {
                trial_count,
                minimum: MIN_SAMPLE_SIZE,
            });
        }
        Ok(Self { trial_count })
    }

    pub fn trial_count(&self) -> u32 {
        self.trial_count
    }

    /// Draw observed statistics. Draw order is count, mean, variance.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        predicted: &PredictedStatistics,
        rng: &mut R,
    ) -> Result<ObservedStatistics, SamplingError> {
        validate_prediction(predicted)?;

        let n = self.trial_count;
        let nf = n as f64;

        let binomial = Binomial::new(u64::from(n), predicted.accuracy_rate).map_err(|_| {
            SamplingError::InvalidPrediction {
                field: "accuracy_rate",
                value: predicted.accuracy_rate,
            }
        })?;
        let normal = Normal::new(predicted.mean_rt, (predicted.rt_variance / nf).sqrt())
            .map_err(|_| SamplingError::InvalidPrediction {
                field: "rt_variance",
                value: predicted.rt_variance,
            })?;
        let gamma = Gamma::new((nf - 1.0) / 2.0, 2.0 * predicted.rt_variance / (nf - 1.0))
            .map_err(|_| SamplingError::InvalidPrediction {
                field: "rt_variance",
                value: predicted.rt_variance,
            })?;

        // The binomial count never exceeds n, so it fits back into u32.
        let correct_count = binomial.sample(rng).min(u64::from(n)) as u32;
        let mean_rt = normal.sample(rng);
        let rt_variance = gamma.sample(rng);

        Ok(ObservedStatistics {
            accuracy_rate: correct_count as f64 / nf,
            mean_rt,
            rt_variance,
            correct_count,
            trial_count: n,
        })
    }
}

/// One-shot form of [`ObservationSampler::sample`].
pub fn sample_observed<R: Rng + ?Sized>(
    predicted: &PredictedStatistics,
    trial_count: u32,
    rng: &mut R,
) -> Result<ObservedStatistics, SamplingError> {
    ObservationSampler::new(trial_count)?.sample(predicted, rng)
}

fn validate_prediction(predicted: &PredictedStatistics) -> Result<(), SamplingError> {
    if !(0.0..=1.0).contains(&predicted.accuracy_rate) {
        return Err(SamplingError::InvalidPrediction {
            field: "accuracy_rate",
            value: predicted.accuracy_rate,
        });
    }
    if !predicted.mean_rt.is_finite() {
        return Err(SamplingError::InvalidPrediction {
            field: "mean_rt",
            value: predicted.mean_rt,
        });
    }
    if !(predicted.rt_variance.is_finite() && predicted.rt_variance > 0.0) {
        return Err(SamplingError::InvalidPrediction {
            field: "rt_variance",
            value: predicted.rt_variance,
        });
    }
    Ok(())
}
