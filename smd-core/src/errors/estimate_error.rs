//! Estimation errors.

use super::error_code::{self, SmdErrorCode};

/// Errors that can occur while turning a p-value into an SMD.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("p-value must lie strictly between 0 and 1, got {value}")]
    InvalidPValue { value: f64 },

    #[error("degrees of freedom `{field}` must be finite and positive, got {value}")]
    InvalidDegreesOfFreedom { field: &'static str, value: f64 },

    #[error("t-distribution quantile unavailable: {message}")]
    QuantileUnavailable { message: String },

    #[error("non-finite {stage} ({value}); inputs are too extreme to estimate")]
    NumericOverflow { stage: &'static str, value: f64 },
}

/// Result type for estimation operations.
pub type EstimateResult<T> = Result<T, EstimateError>;

impl EstimateError {
    /// True when the inputs fall outside the formula's domain, as opposed to
    /// in-range inputs that broke down numerically.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPValue { .. } | Self::InvalidDegreesOfFreedom { .. }
        )
    }
}

impl SmdErrorCode for EstimateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPValue { .. } | Self::InvalidDegreesOfFreedom { .. } => {
                error_code::DOMAIN_ERROR
            }
            Self::QuantileUnavailable { .. } => error_code::QUANTILE_ERROR,
            Self::NumericOverflow { .. } => error_code::NUMERIC_OVERFLOW,
        }
    }
}
