//! Core types for the SMD estimator: errors, configuration, and tracing.

pub mod config;
pub mod errors;
pub mod tracing;
