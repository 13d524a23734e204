//! Report writer errors.

use super::error_code::{self, EzDiffErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EzDiffErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
