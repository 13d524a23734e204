//! Inverse model: observed statistics back to parameter estimates.
//!
//! With `L = ln(R / (1 − R))`:
//!   ν̂ = sign(R − ½) · ⁴√( L · (R²L − RL + R − ½) / V )
//!   â = L / ν̂
//!   τ̂ = M − (â / 2ν̂) · (1 − e^(−ν̂â)) / (1 + e^(−ν̂â))
//!
//! The exponent in τ̂ carries the same sign as the forward model's
//! `y = e^(−aν)`, so inverting noiseless predictions returns the inputs.

use ezdiff_core::constants::DEFAULT_CLAMP_EPSILON;
use ezdiff_core::{EdgeCorrection, InversionError, ObservedStatistics, RecoveredParameters};

/// Inverse model with its edge handling for the accuracy rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseModel {
    epsilon: f64,
    edge_correction: EdgeCorrection,
}

impl InverseModel {
    /// `epsilon` is clamped to a usable range; config validation rejects
    /// values outside (0, 0.5) before they get here.
    pub fn new(epsilon: f64, edge_correction: EdgeCorrection) -> Self {
        let epsilon = if epsilon.is_finite() {
            epsilon.clamp(f64::MIN_POSITIVE, 0.5 - f64::EPSILON)
        } else {
            DEFAULT_CLAMP_EPSILON
        };
        Self {
            epsilon,
            edge_correction,
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn edge_correction(&self) -> EdgeCorrection {
        self.edge_correction
    }

    /// Accuracy rate as fed to the logit: never exactly 0 or 1.
    pub fn corrected_accuracy(&self, observed: &ObservedStatistics) -> f64 {
        let mut r = observed.accuracy_rate;
        if self.edge_correction == EdgeCorrection::HalfTrial && observed.trial_count > 0 {
            let half = 0.5 / observed.trial_count as f64;
            if r <= 0.0 {
                r = half;
            } else if r >= 1.0 {
                r = 1.0 - half;
            }
        }
        r.clamp(self.epsilon, 1.0 - self.epsilon)
    }

    pub fn recover(
        &self,
        observed: &ObservedStatistics,
    ) -> Result<RecoveredParameters, InversionError> {
        check_finite("accuracy_rate", observed.accuracy_rate)?;
        check_finite("mean_rt", observed.mean_rt)?;
        check_finite("rt_variance", observed.rt_variance)?;
        if observed.rt_variance <= 0.0 {
            return Err(InversionError::NonPositiveVariance {
                variance: observed.rt_variance,
            });
        }

        let r = self.corrected_accuracy(observed);
        let logit = (r / (1.0 - r)).ln();

        let radicand =
            logit * (r * r * logit - r * logit + r - 0.5) / observed.rt_variance;
        if radicand < 0.0 {
            return Err(InversionError::NegativeRadicand { radicand });
        }
        check_finite("drift radicand", radicand)?;

        let sign = if r > 0.5 {
            1.0
        } else if r < 0.5 {
            -1.0
        } else {
            0.0
        };
        let drift = sign * radicand.sqrt().sqrt();
        if drift == 0.0 {
            return Err(InversionError::ZeroDrift { accuracy_rate: r });
        }

        let boundary = logit / drift;
        let y = (-drift * boundary).exp();
        let nondecision =
            observed.mean_rt - (boundary / (2.0 * drift)) * ((1.0 - y) / (1.0 + y));

        check_finite("boundary estimate", boundary)?;
        check_finite("nondecision estimate", nondecision)?;

        Ok(RecoveredParameters {
            boundary,
            drift,
            nondecision,
        })
    }
}

impl Default for InverseModel {
    fn default() -> Self {
        Self::new(DEFAULT_CLAMP_EPSILON, EdgeCorrection::Clamp)
    }
}

/// Recover with the default clamp of 1e-6.
pub fn recover(observed: &ObservedStatistics) -> Result<RecoveredParameters, InversionError> {
    InverseModel::default().recover(observed)
}

fn check_finite(field: &'static str, value: f64) -> Result<(), InversionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InversionError::NonFiniteInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward::predict;
    use ezdiff_core::LatentParameters;

    fn observed(accuracy_rate: f64, mean_rt: f64, rt_variance: f64, n: u32) -> ObservedStatistics {
        ObservedStatistics {
            accuracy_rate,
            mean_rt,
            rt_variance,
            correct_count: (accuracy_rate * n as f64).round() as u32,
            trial_count: n,
        }
    }

    #[test]
    fn test_noiseless_round_trip_reference_point() {
        let truth = LatentParameters::new(1.2, 1.5, 0.3);
        let obs = ObservedStatistics::noiseless(&predict(&truth), 1000);
        let est = recover(&obs).unwrap();
        assert!((est.boundary - 1.2).abs() < 1e-9, "boundary {}", est.boundary);
        assert!((est.drift - 1.5).abs() < 1e-9, "drift {}", est.drift);
        assert!((est.nondecision - 0.3).abs() < 1e-9, "nondecision {}", est.nondecision);
    }

    #[test]
    fn test_below_chance_gives_negative_drift_positive_boundary() {
        let est = recover(&observed(0.3, 0.6, 0.05, 100)).unwrap();
        assert!(est.drift < 0.0);
        assert!(est.boundary > 0.0);
    }

    #[test]
    fn test_chance_accuracy_is_zero_drift() {
        let err = recover(&observed(0.5, 0.6, 0.05, 40)).unwrap_err();
        assert_eq!(err, InversionError::ZeroDrift { accuracy_rate: 0.5 });
    }

    #[test]
    fn test_zero_variance_is_degenerate() {
        let err = recover(&observed(0.8, 0.6, 0.0, 40)).unwrap_err();
        assert!(matches!(err, InversionError::NonPositiveVariance { .. }));
    }

    #[test]
    fn test_non_finite_inputs_are_degenerate() {
        let err = recover(&observed(0.8, f64::NAN, 0.05, 40)).unwrap_err();
        assert!(matches!(
            err,
            InversionError::NonFiniteInput { field: "mean_rt", .. }
        ));
        let err = recover(&observed(f64::INFINITY, 0.6, 0.05, 40)).unwrap_err();
        assert!(matches!(err, InversionError::NonFiniteInput { .. }));
    }

    #[test]
    fn test_perfect_accuracy_is_clamped_not_infinite() {
        let est = recover(&observed(1.0, 0.6, 0.05, 10)).unwrap();
        assert!(est.drift.is_finite() && est.drift > 0.0);
        assert!(est.boundary.is_finite() && est.boundary > 0.0);
        assert!(est.nondecision.is_finite());
    }

    #[test]
    fn test_zero_accuracy_is_clamped_not_infinite() {
        let est = recover(&observed(0.0, 0.6, 0.05, 10)).unwrap();
        assert!(est.drift.is_finite() && est.drift < 0.0);
        assert!(est.boundary.is_finite() && est.boundary > 0.0);
    }

    #[test]
    fn test_clamped_edges_are_mirror_images() {
        let hi = recover(&observed(1.0, 0.6, 0.05, 10)).unwrap();
        let lo = recover(&observed(0.0, 0.6, 0.05, 10)).unwrap();
        assert!((hi.drift + lo.drift).abs() < 1e-9);
        assert!((hi.boundary - lo.boundary).abs() < 1e-9);
        assert!((hi.nondecision - lo.nondecision).abs() < 1e-9);
    }

    #[test]
    fn test_half_trial_correction_softens_edges() {
        let obs = observed(1.0, 0.6, 0.05, 10);
        let clamp = InverseModel::default();
        let half = InverseModel::new(1e-6, EdgeCorrection::HalfTrial);
        assert_eq!(half.corrected_accuracy(&obs), 0.95);
        let a_clamp = clamp.recover(&obs).unwrap().boundary;
        let a_half = half.recover(&obs).unwrap().boundary;
        assert!(a_half < a_clamp);
    }

    #[test]
    fn test_corrected_accuracy_inside_unit_interval() {
        let model = InverseModel::new(1e-3, EdgeCorrection::Clamp);
        assert_eq!(model.corrected_accuracy(&observed(0.0, 0.5, 0.1, 10)), 1e-3);
        assert_eq!(model.corrected_accuracy(&observed(1.0, 0.5, 0.1, 10)), 1.0 - 1e-3);
        assert_eq!(model.corrected_accuracy(&observed(0.7, 0.5, 0.1, 10)), 0.7);
    }

    #[test]
    fn test_invalid_epsilon_normalized() {
        assert_eq!(
            InverseModel::new(f64::NAN, EdgeCorrection::Clamp).epsilon(),
            DEFAULT_CLAMP_EPSILON
        );
        assert!(InverseModel::new(0.9, EdgeCorrection::Clamp).epsilon() < 0.5);
    }
}
