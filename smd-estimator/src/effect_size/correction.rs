//! Hedges' small-sample bias correction.

use smd_core::errors::{EstimateError, EstimateResult};

/// Hedges' J factor for a standardized mean difference.
///
/// J = 1 - 3 / (4·df - 1), where df is the combined degrees of freedom.
/// At 1 df or fewer the factor is non-positive and no longer a correction,
/// so those inputs are outside the correction's domain.
pub fn hedges_j(total_df: f64) -> EstimateResult<f64> {
    let j = 1.0 - 3.0 / (4.0 * total_df - 1.0);
    if j.is_finite() && j > 0.0 && j <= 1.0 {
        Ok(j)
    } else {
        Err(EstimateError::InvalidDegreesOfFreedom {
            field: "total_df",
            value: total_df,
        })
    }
}
