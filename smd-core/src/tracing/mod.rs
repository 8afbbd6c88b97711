//! Observability for the SMD estimator.
//! `tracing` crate with `EnvFilter`, levels set through `SMD_LOG`.

pub mod setup;

pub use setup::init_tracing;
