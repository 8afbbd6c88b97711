//! Estimator configuration with layered TOML resolution.

use serde::{Deserialize, Serialize};

use super::Tails;
use crate::errors::ConfigError;

/// Options that change how an SMD is derived from a p-value.
///
/// Only ever set in-process: nothing here is read from the environment or
/// from files, so a given config always yields the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Tail convention of the p-value. Default: two-sided.
    pub tails: Option<Tails>,
    /// Multiply by Hedges' J. Default: false.
    pub hedges_correction: Option<bool>,
}

impl EstimatorConfig {
    /// Resolve config from TOML layers, lowest priority first, on top of the
    /// compiled defaults. Keys missing from a layer leave earlier values alone.
    pub fn layered(layers: &[&str]) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (i, layer) in layers.iter().enumerate() {
            let parsed = toml::from_str::<Self>(layer).map_err(|e| ConfigError::ParseError {
                source_name: format!("<layer {i}>"),
                message: e.to_string(),
            })?;
            config.merge(&parsed);
        }

        tracing::debug!(
            layers = layers.len(),
            tails = %config.effective_tails(),
            hedges_correction = config.effective_hedges_correction(),
            "resolved estimator config"
        );
        Ok(config)
    }

    /// Parse config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            source_name: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Overwrite fields with `other`'s values where `other` has `Some`.
    pub fn merge(&mut self, other: &EstimatorConfig) {
        if other.tails.is_some() {
            self.tails = other.tails;
        }
        if other.hedges_correction.is_some() {
            self.hedges_correction = other.hedges_correction;
        }
    }

    /// Returns the effective tail convention, defaulting to two-sided.
    pub fn effective_tails(&self) -> Tails {
        self.tails.unwrap_or_default()
    }

    /// Returns whether Hedges' correction applies, defaulting to false.
    pub fn effective_hedges_correction(&self) -> bool {
        self.hedges_correction.unwrap_or(false)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            message: e.to_string(),
        })
    }
}
