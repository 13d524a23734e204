//! # ezdiff-core
//!
//! Foundation crate for the EZ-diffusion simulate-and-recover study.
//! Defines the value types, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{EzDiffConfig, ModelConfig, OutputConfig, StudyConfig};
pub use errors::{
    ConfigError, DegenerateReason, EzDiffErrorCode, InversionError, RecoveryError, ReportError,
    SamplingError,
};
pub use types::{
    DegeneratePolicy, EdgeCorrection, LatentParameters, ObservedStatistics, ParameterRanges,
    ParameterVector, PredictedStatistics, RecoveredParameters, UniformRange,
};
