//! Configuration for the SMD estimator.
//! TOML layers merged over compiled defaults; later layers win.

pub mod estimator_config;
pub mod tails;

pub use estimator_config::EstimatorConfig;
pub use tails::Tails;
