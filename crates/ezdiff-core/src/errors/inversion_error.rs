//! Degenerate inversions.
//!
//! The inverse model returns one of these instead of a NaN when a set of
//! observed statistics has no real-valued parameter estimate.

use serde::{Deserialize, Serialize};

use super::error_code::{self, EzDiffErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InversionError {
    /// V_obs = 0 divides the drift radicand by zero; negative or NaN variance
    /// has no meaning at all.
    #[error("observed RT variance must be positive, got {variance}")]
    NonPositiveVariance { variance: f64 },

    /// The fourth root of a negative number is not real.
    #[error("drift radicand is negative ({radicand}); no real fourth root")]
    NegativeRadicand { radicand: f64 },

    /// R_obs = 0.5 gives a zero logit, so the boundary estimate L / ν̂ is 0 / 0.
    #[error("drift estimate is zero (accuracy rate {accuracy_rate}); boundary is undefined")]
    ZeroDrift { accuracy_rate: f64 },

    #[error("observed {field} is not finite: {value}")]
    NonFiniteInput { field: &'static str, value: f64 },
}

impl InversionError {
    /// Coarse reason used as the tally key in recovery summaries.
    pub fn reason(&self) -> DegenerateReason {
        match self {
            Self::NonPositiveVariance { .. } => DegenerateReason::NonPositiveVariance,
            Self::NegativeRadicand { .. } => DegenerateReason::NegativeRadicand,
            Self::ZeroDrift { .. } => DegenerateReason::ZeroDrift,
            Self::NonFiniteInput { .. } => DegenerateReason::NonFiniteInput,
        }
    }
}

impl EzDiffErrorCode for InversionError {
    fn error_code(&self) -> &'static str {
        error_code::DEGENERATE_INVERSION
    }
}

/// Why an iteration was degenerate, without the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateReason {
    NonPositiveVariance,
    NegativeRadicand,
    ZeroDrift,
    NonFiniteInput,
}

impl DegenerateReason {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NonPositiveVariance => "non_positive_variance",
            Self::NegativeRadicand => "negative_radicand",
            Self::ZeroDrift => "zero_drift",
            Self::NonFiniteInput => "non_finite_input",
        }
    }
}
