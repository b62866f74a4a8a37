use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six scoring categories. The set is closed: every per-category
/// vector in this crate has exactly one named field per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rating,
    Safety,
    Cost,
    Climate,
    Activities,
    Walkability,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Rating,
        Category::Safety,
        Category::Cost,
        Category::Climate,
        Category::Activities,
        Category::Walkability,
    ];

    /// Key used in config files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Category::Rating => "rating",
            Category::Safety => "safety",
            Category::Cost => "cost",
            Category::Climate => "climate",
            Category::Activities => "activities",
            Category::Walkability => "walkability",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Rating => "Rating",
            Category::Safety => "Safety",
            Category::Cost => "Cost",
            Category::Climate => "Climate",
            Category::Activities => "Activities",
            Category::Walkability => "Walkability",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .with_context(|| {
                format!(
                    "Unknown category '{}' (expected one of: rating, safety, cost, climate, activities, walkability)",
                    s
                )
            })
    }
}

/// Parse a `category=value` pair, as used by `--weight` and `--min`
pub fn parse_assignment(s: &str) -> Result<(Category, f64)> {
    let Some((key, value)) = s.split_once('=') else {
        bail!("Expected CATEGORY=VALUE, got '{}'", s)
    };
    let category: Category = key.parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid number '{}' for {}", value.trim(), category))?;
    Ok((category, value))
}

/// User-adjustable importance of each category.
///
/// Weights are independent; nothing forces them to sum to 100. Missing
/// fields in a config file fall back to the defaults.
///
/// Example YAML:
/// ```yaml
/// weights:
///   rating: 20
///   safety: 20
///   cost: 30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightVector {
    pub rating: f64,
    pub safety: f64,
    pub cost: f64,
    pub climate: f64,
    pub activities: f64,
    pub walkability: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            rating: 20.0,
            safety: 20.0,
            cost: 20.0,
            climate: 15.0,
            activities: 15.0,
            walkability: 10.0,
        }
    }
}

impl WeightVector {
    pub const ZERO: WeightVector = WeightVector {
        rating: 0.0,
        safety: 0.0,
        cost: 0.0,
        climate: 0.0,
        activities: 0.0,
        walkability: 0.0,
    };

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Rating => self.rating,
            Category::Safety => self.safety,
            Category::Cost => self.cost,
            Category::Climate => self.climate,
            Category::Activities => self.activities,
            Category::Walkability => self.walkability,
        }
    }

    /// Return a copy with one weight replaced
    pub fn with(mut self, category: Category, value: f64) -> Self {
        match category {
            Category::Rating => self.rating = value,
            Category::Safety => self.safety = value,
            Category::Cost => self.cost = value,
            Category::Climate => self.climate = value,
            Category::Activities => self.activities = value,
            Category::Walkability => self.walkability = value,
        }
        self
    }

    /// Sum of all six weights
    pub fn total(&self) -> f64 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Minimum category score (0-100) a destination needs to stay in the
/// candidate set. Zero means no constraint.
///
/// Example YAML:
/// ```yaml
/// filters:
///   safety: 60
///   cost: 50
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterThresholds {
    pub rating: f64,
    pub safety: f64,
    pub cost: f64,
    pub climate: f64,
    pub activities: f64,
    pub walkability: f64,
}

impl FilterThresholds {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Rating => self.rating,
            Category::Safety => self.safety,
            Category::Cost => self.cost,
            Category::Climate => self.climate,
            Category::Activities => self.activities,
            Category::Walkability => self.walkability,
        }
    }

    /// Return a copy with one threshold replaced
    pub fn with(mut self, category: Category, value: f64) -> Self {
        match category {
            Category::Rating => self.rating = value,
            Category::Safety => self.safety = value,
            Category::Cost => self.cost = value,
            Category::Climate => self.climate = value,
            Category::Activities => self.activities = value,
            Category::Walkability => self.walkability = value,
        }
        self
    }

    /// True when no threshold constrains anything
    pub fn is_unconstrained(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c) <= 0.0)
    }
}
