use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Safety score assumed when a destination has no safety data.
pub const DEFAULT_SAFETY: f64 = 5.0;
/// Average temperature (Celsius) assumed when climate data is missing.
pub const DEFAULT_CLIMATE_TEMP_C: f64 = 15.0;
/// Walkability assumed when a destination has no walkability data.
pub const DEFAULT_WALKABILITY: f64 = 5.0;

/// Price band of a destination. Shown to the user, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BudgetTier {
    #[serde(rename = "budget", alias = "Budget")]
    Budget,
    #[serde(rename = "mid-range", alias = "Mid-range")]
    MidRange,
    #[serde(rename = "luxury", alias = "Luxury")]
    Luxury,
}

impl BudgetTier {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::MidRange => "Mid-range",
            BudgetTier::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(BudgetTier::Budget),
            "mid-range" | "midrange" | "mid" => Ok(BudgetTier::MidRange),
            "luxury" => Ok(BudgetTier::Luxury),
            other => anyhow::bail!(
                "Unknown budget tier '{}' (expected budget, mid-range or luxury)",
                other
            ),
        }
    }
}

/// Daily cost breakdown in a common currency unit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Costs {
    #[serde(default)]
    pub accommodation: f64,
    #[serde(default)]
    pub food: f64,
    #[serde(default)]
    pub activities: f64,
    #[serde(default)]
    pub transport: f64,
}

impl Costs {
    /// Sum of the four daily cost components
    pub fn total(&self) -> f64 {
        self.accommodation + self.food + self.activities + self.transport
    }
}

/// A destination record as read from a catalog.
///
/// Optional attributes are kept as `None` so the catalog round-trips
/// faithfully; the accessors below apply the default-value policy
/// used by scoring.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Destination {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default)]
    pub poi_count: u64,
    #[serde(default)]
    pub safety_overall: Option<f64>,
    #[serde(default)]
    pub costs: Costs,
    #[serde(default)]
    pub climate_avg_temp_c: Option<f64>,
    #[serde(default)]
    pub walkability: Option<f64>,
    pub budget_tier: BudgetTier,
}

impl Destination {
    /// Display name, falling back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn total_cost(&self) -> f64 {
        self.costs.total()
    }

    pub fn safety(&self) -> f64 {
        self.safety_overall.unwrap_or(DEFAULT_SAFETY)
    }

    pub fn climate_temp(&self) -> f64 {
        self.climate_avg_temp_c.unwrap_or(DEFAULT_CLIMATE_TEMP_C)
    }

    pub fn walkability_score(&self) -> f64 {
        self.walkability.unwrap_or(DEFAULT_WALKABILITY)
    }
}
