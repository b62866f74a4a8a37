pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{load_catalog, parse_catalog, CatalogFormat};
pub use types::{BudgetTier, Costs, Destination};
pub use validation::validate_catalog;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("builtin.yaml");

/// An ordered set of destinations.
///
/// Order matters: it is the input order that ranking falls back to when
/// weighted scores tie.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub destinations: Vec<Destination>,
}

impl Catalog {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// The sample catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        parse_catalog(BUILTIN_CATALOG, CatalogFormat::Yaml)
            .context("Failed to parse built-in destination catalog")
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Look up a destination by id (case-insensitive)
    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|d| d.id.eq_ignore_ascii_case(id))
    }

    /// Keep only destinations in the given budget tier, preserving order
    pub fn filter_tier(&self, tier: BudgetTier) -> Catalog {
        Catalog::new(
            self.destinations
                .iter()
                .filter(|d| d.budget_tier == tier)
                .cloned()
                .collect(),
        )
    }
}
