//! Side-by-side comparison of a handful of destinations.
//!
//! A comparison treats its selection as the whole candidate set, so
//! scores are relative to the selected destinations only.

use crate::catalog::{Catalog, Destination};
use crate::scoring::{rank, score, Category, RankedDestination, WeightVector};
use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashSet;

pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 4;

/// Resolve `ids` against the catalog in the order given.
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than 2 or more than 4 ids are given
/// - An id appears twice
/// - An id is not in the catalog
pub fn select(catalog: &Catalog, ids: &[String]) -> Result<Vec<Destination>> {
    if ids.len() < MIN_COMPARE || ids.len() > MAX_COMPARE {
        bail!(
            "Select between {} and {} destinations to compare (got {})",
            MIN_COMPARE,
            MAX_COMPARE,
            ids.len()
        );
    }

    let mut seen = HashSet::new();
    let mut selection = Vec::with_capacity(ids.len());
    let mut unknown = Vec::new();

    for id in ids {
        if !seen.insert(id.to_ascii_lowercase()) {
            bail!("Destination '{}' selected more than once", id);
        }
        match catalog.get(id) {
            Some(dest) => selection.push(dest.clone()),
            None => unknown.push(id.as_str()),
        }
    }

    if !unknown.is_empty() {
        bail!("Unknown destination id(s): {}", unknown.join(", "));
    }

    Ok(selection)
}

/// Scores and ranking for a selection of destinations
#[derive(Debug, Clone, Serialize)]
pub struct Comparison<'a> {
    /// Selection in input order
    pub destinations: &'a [Destination],
    pub ranking: Vec<RankedDestination<'a>>,
}

impl<'a> Comparison<'a> {
    /// The top-ranked destination, if any
    pub fn winner(&self) -> Option<&RankedDestination<'a>> {
        self.ranking.first()
    }

    /// Ids of every destination sharing the best score in `category`
    pub fn leaders(&self, category: Category) -> Vec<&'a str> {
        let best = self
            .ranking
            .iter()
            .map(|r| r.scored.category_scores.get(category))
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))));

        let Some(best) = best else {
            return Vec::new();
        };

        self.destinations
            .iter()
            .filter(|d| {
                self.ranking.iter().any(|r| {
                    r.scored.destination.id == d.id
                        && r.scored.category_scores.get(category) == best
                })
            })
            .map(|d| d.id.as_str())
            .collect()
    }

    /// Ranked entry for a destination id
    pub fn entry(&self, id: &str) -> Option<&RankedDestination<'a>> {
        self.ranking.iter().find(|r| r.scored.destination.id == id)
    }
}

/// Score a selection against itself and rank it. No thresholds apply.
pub fn compare<'a>(selection: &'a [Destination], weights: &WeightVector) -> Comparison<'a> {
    Comparison {
        destinations: selection,
        ranking: rank(score(selection, weights)),
    }
}
