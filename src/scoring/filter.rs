use super::config::{Category, FilterThresholds};
use super::engine::ScoredDestination;
use super::factors::CategoryScores;
use tracing::debug;

/// Categories in which `scores` falls below its threshold
pub fn failing_categories(scores: &CategoryScores, thresholds: &FilterThresholds) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| scores.get(*c) < thresholds.get(*c))
        .collect()
}

/// True when every category meets or exceeds its threshold
pub fn meets_thresholds(scores: &CategoryScores, thresholds: &FilterThresholds) -> bool {
    Category::ALL
        .iter()
        .all(|c| scores.get(*c) >= thresholds.get(*c))
}

/// Keep only destinations that meet every threshold, preserving order.
///
/// Runs on already-scored destinations, so removing one never changes the
/// scores of the rest.
pub fn filter<'a>(
    scored: Vec<ScoredDestination<'a>>,
    thresholds: &FilterThresholds,
) -> Vec<ScoredDestination<'a>> {
    scored
        .into_iter()
        .filter(|s| {
            let keep = meets_thresholds(&s.category_scores, thresholds);
            if !keep {
                debug!(
                    destination = %s.destination.id,
                    failed = ?failing_categories(&s.category_scores, thresholds),
                    "Filtered out by thresholds"
                );
            }
            keep
        })
        .collect()
}
