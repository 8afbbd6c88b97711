//! Standardized mean difference from a p-value and degrees of freedom.
//!
//! t   = Q(1 - p/2, df1 + df2) = -Q(p/2, df1 + df2)
//! smd = t · sqrt((df1 + df2) / (df1 · df2))
//!
//! Q is the Student's t quantile function, evaluated on the lower tail. Inputs outside the formula's
//! domain are errors, never NaN.

use smd_core::config::EstimatorConfig;
use smd_core::errors::{EstimateError, EstimateResult};

use super::correction::hedges_j;
use super::quantile::{StatrsQuantile, TQuantile};
use super::types::SmdEstimate;

/// Two-tailed SMD with the default `statrs` quantile and no correction.
///
/// `calculate_smd(0.05, 30.0, 30.0)` ≈ 0.5165.
pub fn calculate_smd(p_value: f64, df1: f64, df2: f64) -> EstimateResult<f64> {
    SmdEstimator::new(EstimatorConfig::default()).smd(p_value, df1, df2)
}

/// Stateless SMD estimator, parameterized by its quantile provider.
#[derive(Debug, Clone)]
pub struct SmdEstimator<Q: TQuantile = StatrsQuantile> {
    config: EstimatorConfig,
    quantile: Q,
}

impl SmdEstimator<StatrsQuantile> {
    /// Estimator backed by `statrs`.
    pub fn new(config: EstimatorConfig) -> Self {
        Self::with_quantile(config, StatrsQuantile)
    }
}

impl Default for SmdEstimator<StatrsQuantile> {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

impl<Q: TQuantile> SmdEstimator<Q> {
    /// Estimator with a caller-supplied quantile provider.
    pub fn with_quantile(config: EstimatorConfig, quantile: Q) -> Self {
        Self { config, quantile }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Compute the SMD and return it with its intermediate values.
    pub fn estimate(&self, p_value: f64, df1: f64, df2: f64) -> EstimateResult<SmdEstimate> {
        validate_p_value(p_value)?;
        validate_df("df1", df1)?;
        validate_df("df2", df2)?;

        let total_df = ensure_finite("total_df", df1 + df2)?;
        let tails = self.config.effective_tails();

        // Subnormal tails have no usable precision left.
        let tail_prob = tails.tail_probability(p_value);
        if tail_prob < f64::MIN_POSITIVE {
            return Err(overflow("tail_probability", tail_prob));
        }

        let t_critical = -self.quantile.inverse_cdf(tail_prob, total_df)?;
        let t_critical = ensure_finite("t_critical", t_critical)?;
        let scale = ensure_finite("scale", (total_df / (df1 * df2)).sqrt())?;

        let correction = if self.config.effective_hedges_correction() {
            hedges_j(total_df)?
        } else {
            1.0
        };

        let smd = ensure_finite("smd", t_critical * scale * correction)?;

        tracing::debug!(
            p_value,
            total_df,
            t_critical,
            correction,
            smd,
            tails = %tails,
            "estimated standardized mean difference"
        );

        Ok(SmdEstimate {
            p_value,
            df1,
            df2,
            total_df,
            tails,
            tail_prob,
            t_critical,
            scale,
            correction,
            smd,
        })
    }

    /// Compute only the SMD.
    pub fn smd(&self, p_value: f64, df1: f64, df2: f64) -> EstimateResult<f64> {
        self.estimate(p_value, df1, df2).map(|e| e.smd)
    }
}

fn validate_p_value(p_value: f64) -> EstimateResult<()> {
    // Negated form so NaN fails too.
    if !(p_value > 0.0 && p_value < 1.0) {
        return Err(EstimateError::InvalidPValue { value: p_value });
    }
    Ok(())
}

fn validate_df(field: &'static str, value: f64) -> EstimateResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EstimateError::InvalidDegreesOfFreedom { field, value });
    }
    Ok(())
}

fn ensure_finite(stage: &'static str, value: f64) -> EstimateResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(overflow(stage, value))
    }
}

fn overflow(stage: &'static str, value: f64) -> EstimateError {
    tracing::warn!(stage, value, "numeric breakdown during SMD estimation");
    EstimateError::NumericOverflow { stage, value }
}
