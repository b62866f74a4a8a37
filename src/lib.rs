//! Travel destination scoring and comparison.
//!
//! Destinations are scored per category relative to the candidate set they
//! are compared against, combined with user weights, filtered by minimum
//! category scores and ranked.
//!
//! ```
//! use dest_rank::catalog::Catalog;
//! use dest_rank::scoring::{filter, rank, score, FilterThresholds, WeightVector};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let scored = score(&catalog.destinations, &WeightVector::default());
//! let ranked = rank(filter(scored, &FilterThresholds::default()));
//! assert_eq!(ranked.len(), catalog.len());
//! assert_eq!(ranked[0].rank, 1);
//! ```

pub mod catalog;
pub mod compare;
pub mod config;
pub mod logging;
pub mod output;
pub mod scoring;
