//! Student's t quantile function built on `statrs` special functions.
//!
//! `statrs`' own `StudentsT::inverse_cdf` loses accuracy (and can stall) for
//! large or fractional degrees of freedom, so the quantile is solved here:
//! - df < `CORNISH_FISHER_MIN_DF`: bisection on ln|t| against the tail
//!   probability from the regularized incomplete beta function.
//! - df ≥ `CORNISH_FISHER_MIN_DF`: Cornish–Fisher expansion around the
//!   normal quantile (Abramowitz & Stegun 26.7.5).
//!
//! Both paths run a bounded number of steps.

use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::beta::beta_reg;

use smd_core::errors::{EstimateError, EstimateResult};

/// Degrees of freedom from which the Cornish–Fisher expansion replaces
/// bisection.
pub const CORNISH_FISHER_MIN_DF: f64 = 1e5;

/// Bisection bracket on ln|t|. e^354 still squares to a finite f64.
const MIN_LN_T: f64 = -700.0;
const MAX_LN_T: f64 = 354.0;
const MAX_BISECTIONS: usize = 128;

/// Inverse CDF of the standard Student's t-distribution.
///
/// The estimator consumes exactly this operation; implement it to swap in
/// another numeric backend.
pub trait TQuantile: Send + Sync {
    /// Value below which `probability` of the mass lies, for a t-distribution
    /// with `degrees_of_freedom`. May be infinite when the true quantile
    /// exceeds the f64 range.
    fn inverse_cdf(&self, probability: f64, degrees_of_freedom: f64) -> EstimateResult<f64>;
}

/// `statrs`-backed quantile provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatrsQuantile;

impl TQuantile for StatrsQuantile {
    fn inverse_cdf(&self, probability: f64, degrees_of_freedom: f64) -> EstimateResult<f64> {
        if !(probability > 0.0 && probability < 1.0) {
            return Err(EstimateError::QuantileUnavailable {
                message: format!("probability {probability} outside (0, 1)"),
            });
        }
        if !(degrees_of_freedom.is_finite() && degrees_of_freedom > 0.0) {
            return Err(EstimateError::QuantileUnavailable {
                message: format!(
                    "t-distribution needs finite positive freedom, got {degrees_of_freedom}"
                ),
            });
        }
        if probability == 0.5 {
            return Ok(0.0);
        }

        // Solve on the smaller tail so tiny probabilities keep full precision.
        let (tail, sign) = if probability < 0.5 {
            (probability, -1.0)
        } else {
            (1.0 - probability, 1.0)
        };

        let magnitude = if degrees_of_freedom >= CORNISH_FISHER_MIN_DF {
            cornish_fisher(tail, degrees_of_freedom)?
        } else {
            bisect_tail(tail, degrees_of_freedom)
        };

        Ok(sign * magnitude)
    }
}

/// P(T > t) for `t >= 0`.
pub fn upper_tail(t: f64, df: f64) -> f64 {
    let t2 = t * t;
    if !t2.is_finite() {
        return 0.0;
    }

    let a = df / 2.0;
    let x = df / (df + t2);
    // Use whichever form statrs evaluates without its internal swap, so a
    // small tail never comes out of `1 - (1 - tail)`.
    if x < (a + 1.0) / (a + 2.5) {
        0.5 * beta_reg(a, 0.5, x)
    } else {
        0.5 * (1.0 - beta_reg(0.5, a, t2 / (df + t2)))
    }
}

/// |t| with `upper_tail(|t|) == tail`, for `0 < tail < 0.5`.
fn bisect_tail(tail: f64, df: f64) -> f64 {
    if upper_tail(MAX_LN_T.exp(), df) > tail {
        return f64::INFINITY;
    }

    let (mut lo, mut hi) = (MIN_LN_T, MAX_LN_T);
    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if upper_tail(mid.exp(), df) > tail {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    (0.5 * (lo + hi)).exp()
}

/// Four-term Cornish–Fisher expansion of |t| in powers of 1/df.
fn cornish_fisher(tail: f64, df: f64) -> EstimateResult<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| EstimateError::QuantileUnavailable {
        message: e.to_string(),
    })?;
    let z = -normal.inverse_cdf(tail);
    let z2 = z * z;

    let g1 = z * (z2 + 1.0) / 4.0;
    let g2 = z * ((5.0 * z2 + 16.0) * z2 + 3.0) / 96.0;
    let g3 = z * (((3.0 * z2 + 19.0) * z2 + 17.0) * z2 - 15.0) / 384.0;
    let g4 = z * ((((79.0 * z2 + 776.0) * z2 + 1482.0) * z2 - 1920.0) * z2 - 945.0) / 92160.0;

    Ok(z + (g1 + (g2 + (g3 + g4 / df) / df) / df) / df)
}
