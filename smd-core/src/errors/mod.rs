//! Error handling for the SMD estimator.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod estimate_error;

pub use config_error::ConfigError;
pub use error_code::SmdErrorCode;
pub use estimate_error::{EstimateError, EstimateResult};
