//! Effect sizes derived from test statistics.
//!
//! - `smd`: p-value + degrees of freedom → standardized mean difference
//! - `quantile`: Student's t inverse CDF behind the `TQuantile` seam
//! - `correction`: Hedges' small-sample bias correction

pub mod correction;
pub mod quantile;
pub mod smd;
pub mod types;

pub use correction::hedges_j;
pub use quantile::{StatrsQuantile, TQuantile};
pub use smd::{calculate_smd, SmdEstimator};
pub use types::SmdEstimate;
