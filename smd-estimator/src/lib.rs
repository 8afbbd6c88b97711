//! Standardized mean difference (SMD) from a p-value and per-group degrees
//! of freedom, via the Student's t quantile function.
//!
//! ```
//! let smd = smd_estimator::calculate_smd(0.05, 30.0, 30.0).unwrap();
//! assert!((smd - 0.516475).abs() < 1e-4);
//! ```

pub mod effect_size;

pub use effect_size::{calculate_smd, hedges_j, SmdEstimate, SmdEstimator, StatrsQuantile, TQuantile};
pub use smd_core::config::{EstimatorConfig, Tails};
pub use smd_core::errors::{EstimateError, EstimateResult};
