use super::config::{Category, WeightVector};
use super::factors::{category_scores, CandidateSpreads, CategoryScores};
use crate::catalog::Destination;
use serde::Serialize;
use tracing::debug;

/// Fixed divisor of the weighted sum.
///
/// This is deliberately not the weight total: weights summing to 100 give
/// a 0-100 score, other totals scale the score up or down proportionally.
pub const WEIGHT_DIVISOR: f64 = 100.0;

/// A destination with its scores for one candidate set and weight vector
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDestination<'a> {
    pub destination: &'a Destination,
    pub category_scores: CategoryScores,
    pub weighted_score: f64,
}

/// Combine category scores with weights: `sum(score * weight) / 100`
pub fn weighted_score(scores: &CategoryScores, weights: &WeightVector) -> f64 {
    let sum: f64 = Category::ALL
        .iter()
        .map(|c| scores.get(*c) * weights.get(*c))
        .sum();
    sum / WEIGHT_DIVISOR
}

/// Points one category adds to the weighted score
pub fn contribution(score: f64, weight: f64) -> f64 {
    score * weight / WEIGHT_DIVISOR
}

/// Score every destination relative to the others in `destinations`.
///
/// Output order matches input order. An empty input gives an empty output.
pub fn score<'a>(
    destinations: &'a [Destination],
    weights: &WeightVector,
) -> Vec<ScoredDestination<'a>> {
    let Some(spreads) = CandidateSpreads::over(destinations) else {
        debug!("Empty candidate set, nothing to score");
        return Vec::new();
    };

    debug!(
        candidates = destinations.len(),
        rating = ?(spreads.rating.min, spreads.rating.max),
        safety = ?(spreads.safety.min, spreads.safety.max),
        cost = ?(spreads.cost.min, spreads.cost.max),
        activities = ?(spreads.activities.min, spreads.activities.max),
        walkability = ?(spreads.walkability.min, spreads.walkability.max),
        weight_total = weights.total(),
        "Scoring candidate set"
    );

    destinations
        .iter()
        .map(|destination| {
            let category_scores = category_scores(destination, &spreads);
            ScoredDestination {
                destination,
                category_scores,
                weighted_score: weighted_score(&category_scores, weights),
            }
        })
        .collect()
}
