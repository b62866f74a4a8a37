use crate::scoring::{FilterThresholds, WeightVector};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User preferences file.
///
/// Example YAML:
/// ```yaml
/// catalog: ~/trips/destinations.yaml
/// weights:
///   cost: 30
///   climate: 10
/// filters:
///   safety: 60
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Destination catalog to use instead of the built-in one
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Category weights (missing categories use the defaults)
    #[serde(default)]
    pub weights: Option<WeightVector>,

    /// Minimum category scores (missing categories are unconstrained)
    #[serde(default)]
    pub filters: Option<FilterThresholds>,
}

impl Config {
    /// Weights to score with, falling back to the defaults
    pub fn effective_weights(&self) -> WeightVector {
        self.weights.unwrap_or_default()
    }

    pub fn effective_filters(&self) -> FilterThresholds {
        self.filters.unwrap_or_default()
    }
}
