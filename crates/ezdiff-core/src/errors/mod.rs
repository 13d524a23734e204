//! Error handling for the study.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod inversion_error;
pub mod recovery_error;
pub mod report_error;
pub mod sampling_error;

pub use config_error::ConfigError;
pub use error_code::EzDiffErrorCode;
pub use inversion_error::{DegenerateReason, InversionError};
pub use recovery_error::RecoveryError;
pub use report_error::ReportError;
pub use sampling_error::SamplingError;
