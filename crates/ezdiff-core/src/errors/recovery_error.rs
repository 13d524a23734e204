//! Recovery driver errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, EzDiffErrorCode};
use super::{ConfigError, ReportError, SamplingError};

/// Errors that abort a condition or a whole study run.
///
/// Degenerate inversions are not listed here: they are tallied per
/// iteration and never abort the batch.
#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("iteration count must be at least 1")]
    NoIterations,
}

impl EzDiffErrorCode for RecoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sampling(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::NoIterations => error_code::RECOVERY_ERROR,
        }
    }
}
