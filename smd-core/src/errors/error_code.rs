//! SmdErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait SmdErrorCode {
    /// Returns the error code string (e.g., "DOMAIN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
pub const QUANTILE_ERROR: &str = "QUANTILE_ERROR";
pub const NUMERIC_OVERFLOW: &str = "NUMERIC_OVERFLOW";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
