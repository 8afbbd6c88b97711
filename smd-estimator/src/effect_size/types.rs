//! Result types for SMD estimation.

use std::fmt;

use serde::{Deserialize, Serialize};
use smd_core::config::Tails;

/// A standardized mean difference together with the intermediate values
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmdEstimate {
    /// Input p-value.
    pub p_value: f64,
    /// Degrees of freedom of the first group.
    pub df1: f64,
    /// Degrees of freedom of the second group.
    pub df2: f64,
    /// `df1 + df2`, the t-distribution's degrees of freedom.
    pub total_df: f64,
    /// Tail convention the p-value was read with.
    pub tails: Tails,
    /// Lower-tail probability passed to the quantile function.
    pub tail_prob: f64,
    /// Critical t-value, `-Q(tail_prob, total_df)`.
    pub t_critical: f64,
    /// `sqrt(total_df / (df1 * df2))`.
    pub scale: f64,
    /// Hedges' J, or 1.0 when uncorrected.
    pub correction: f64,
    /// `t_critical * scale * correction`.
    pub smd: f64,
}

impl SmdEstimate {
    /// Whether Hedges' correction was applied.
    pub fn is_corrected(&self) -> bool {
        self.correction != 1.0
    }
}

impl fmt::Display for SmdEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "smd={:.4} (t={:.4}, df={}, {})",
            self.smd, self.t_critical, self.total_df, self.tails
        )
    }
}
