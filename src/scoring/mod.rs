pub mod config;
pub mod engine;
pub mod factors;
pub mod filter;
pub mod rank;
pub mod validation;

pub use config::*;
pub use engine::{contribution, score, weighted_score, ScoredDestination, WEIGHT_DIVISOR};
pub use factors::{climate_score, normalize_score, CategoryScores};
pub use filter::{failing_categories, filter, meets_thresholds};
pub use rank::{rank, RankedDestination};
pub use validation::validate_preferences;
