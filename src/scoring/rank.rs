use super::engine::ScoredDestination;
use serde::Serialize;

/// A scored destination with its 1-based position in a ranking
#[derive(Debug, Clone, Serialize)]
pub struct RankedDestination<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub scored: ScoredDestination<'a>,
}

/// Sort by weighted score descending and number the result from 1.
///
/// The sort is stable: destinations with equal scores keep their input
/// order. No secondary key is applied. A NaN score ranks below every
/// number.
pub fn rank(mut scored: Vec<ScoredDestination<'_>>) -> Vec<RankedDestination<'_>> {
    scored.sort_by(|a, b| {
        sort_key(b.weighted_score).total_cmp(&sort_key(a.weighted_score))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, scored)| RankedDestination {
            rank: idx + 1,
            scored,
        })
        .collect()
}

fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        // -0.0 and 0.0 must tie
        score + 0.0
    }
}
