use super::config::Category;
use crate::catalog::Destination;
use serde::Serialize;

/// Score given when a relative category has no spread across the candidates
pub const NEUTRAL_SCORE: f64 = 50.0;
/// Temperature (Celsius) that earns a perfect climate score
pub const IDEAL_TEMP_C: f64 = 20.0;
/// Climate points lost per degree away from the ideal temperature
pub const CLIMATE_PENALTY_PER_DEGREE: f64 = 5.0;

/// Map `value` onto 0-100 relative to `[min, max]`.
///
/// Returns [`NEUTRAL_SCORE`] when `min == max`. The result is not clamped.
pub fn normalize_score(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return NEUTRAL_SCORE;
    }
    (value - min) / (max - min) * 100.0
}

/// Absolute climate score: 100 at 20°C, minus 5 per degree of deviation,
/// clamped to 0-100.
pub fn climate_score(temp_c: f64) -> f64 {
    let score = 100.0 - (temp_c - IDEAL_TEMP_C).abs() * CLIMATE_PENALTY_PER_DEGREE;
    score.clamp(0.0, 100.0)
}

/// Min and max of one raw attribute across a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    pub min: f64,
    pub max: f64,
}

impl Spread {
    /// None when there are no values
    pub fn over<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Spread { min: v, max: v }),
            Some(s) => Some(Spread {
                min: s.min.min(v),
                max: s.max.max(v),
            }),
        })
    }

    pub fn normalize(&self, value: f64) -> f64 {
        normalize_score(value, self.min, self.max)
    }
}

/// Raw attribute spreads for the relative categories of a candidate set.
///
/// Climate is absent because it is scored on an absolute scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateSpreads {
    pub rating: Spread,
    pub safety: Spread,
    pub cost: Spread,
    pub activities: Spread,
    pub walkability: Spread,
}

impl CandidateSpreads {
    /// Compute spreads over the candidate set. None when it is empty.
    pub fn over(candidates: &[Destination]) -> Option<Self> {
        Some(Self {
            rating: Spread::over(candidates.iter().map(|d| d.rating))?,
            safety: Spread::over(candidates.iter().map(Destination::safety))?,
            cost: Spread::over(candidates.iter().map(Destination::total_cost))?,
            activities: Spread::over(candidates.iter().map(|d| d.poi_count as f64))?,
            walkability: Spread::over(candidates.iter().map(Destination::walkability_score))?,
        })
    }
}

/// The six normalized sub-scores of one destination, each in 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScores {
    pub rating: f64,
    pub safety: f64,
    pub cost: f64,
    pub climate: f64,
    pub activities: f64,
    pub walkability: f64,
}

impl CategoryScores {
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
}

/// Cost is inverted (cheaper scores higher). A destination without cost
/// data (total of zero) gets the neutral score instead.
pub fn cost_score(total_cost: f64, spread: &Spread) -> f64 {
    if total_cost == 0.0 {
        return NEUTRAL_SCORE;
    }
    100.0 - spread.normalize(total_cost)
}

/// Score every category of `dest` against the candidate set's spreads
pub fn category_scores(dest: &Destination, spreads: &CandidateSpreads) -> CategoryScores {
    CategoryScores {
        rating: spreads.rating.normalize(dest.rating),
        safety: spreads.safety.normalize(dest.safety()),
        cost: cost_score(dest.total_cost(), &spreads.cost),
        climate: climate_score(dest.climate_temp()),
        activities: spreads.activities.normalize(dest.poi_count as f64),
        walkability: spreads.walkability.normalize(dest.walkability_score()),
    }
}
