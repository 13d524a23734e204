//! EzDiffErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable code string
/// for machine consumption (report files, exit diagnostics).
pub trait EzDiffErrorCode {
    /// Returns the error code string (e.g., "DOMAIN_VIOLATION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DOMAIN_VIOLATION: &str = "DOMAIN_VIOLATION";
pub const DEGENERATE_INVERSION: &str = "DEGENERATE_INVERSION";
pub const RECOVERY_ERROR: &str = "RECOVERY_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
