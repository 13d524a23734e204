//! Observation sampler errors (input-constraint violations).

use super::error_code::{self, EzDiffErrorCode};

/// Errors raised before any random draw is made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    #[error("sample size must be at least {minimum} trials, got {trial_count}")]
    InsufficientTrials { trial_count: u32, minimum: u32 },

    #[error("predicted {field} is outside its domain: {value}")]
    InvalidPrediction { field: &'static str, value: f64 },
}

impl EzDiffErrorCode for SamplingError {
    fn error_code(&self) -> &'static str {
        error_code::DOMAIN_VIOLATION
    }
}
