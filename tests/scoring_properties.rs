//! Property coverage for normalization, aggregation, filtering and ranking.

use dest_rank::catalog::{BudgetTier, Costs, Destination};
use dest_rank::scoring::{
    climate_score, filter, normalize_score, rank, score, weighted_score, Category,
    CategoryScores, FilterThresholds, ScoredDestination, WeightVector,
};
use proptest::prelude::*;

prop_compose! {
    fn destination_strategy()(
        rating in 0.0f64..=5.0,
        poi_count in 0u64..5000,
        safety in proptest::option::of(0.0f64..=10.0),
        cost in (1u32..500).prop_map(f64::from),
        temp in proptest::option::of(-20.0f64..45.0),
        walkability in proptest::option::of(0.0f64..=10.0),
    ) -> Destination {
        Destination {
            id: String::new(),
            name: None,
            country: None,
            rating,
            review_count: 0,
            poi_count,
            safety_overall: safety,
            costs: Costs {
                accommodation: cost,
                food: 0.0,
                activities: 0.0,
                transport: 0.0,
            },
            climate_avg_temp_c: temp,
            walkability,
            budget_tier: BudgetTier::MidRange,
        }
    }
}

/// Candidate sets with ids equal to their input position
fn candidates(max_len: usize) -> impl Strategy<Value = Vec<Destination>> {
    proptest::collection::vec(destination_strategy(), 1..max_len).prop_map(|mut dests| {
        for (i, d) in dests.iter_mut().enumerate() {
            d.id = i.to_string();
        }
        dests
    })
}

fn weights_summing_to_100() -> impl Strategy<Value = WeightVector> {
    proptest::array::uniform6(0.0f64..50.0)
        .prop_filter("needs a positive total", |w| w.iter().sum::<f64>() > 0.0)
        .prop_map(|w| {
            let total: f64 = w.iter().sum();
            Category::ALL
                .iter()
                .zip(w)
                .fold(WeightVector::ZERO, |acc, (c, v)| acc.with(*c, v * 100.0 / total))
        })
}

fn category_strategy() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

proptest! {
    #[test]
    fn normalization_stays_within_bounds(
        min in -1000.0f64..1000.0,
        span in 0.001f64..1000.0,
        t in 0.0f64..=1.0,
    ) {
        let max = min + span;
        let value = (min + span * t).min(max);
        let s = normalize_score(value, min, max);
        prop_assert!((0.0..=100.0).contains(&s), "score {} out of bounds", s);
    }

    #[test]
    fn degenerate_normalization_is_neutral(x in -1e6f64..1e6, m in -1e6f64..1e6) {
        prop_assert_eq!(normalize_score(x, m, m), 50.0);
    }

    #[test]
    fn climate_is_symmetric_around_ideal(k in 0.0f64..60.0) {
        let below = climate_score(20.0 - k);
        let above = climate_score(20.0 + k);
        prop_assert!((below - above).abs() < 1e-9);
    }

    #[test]
    fn climate_clamps_outside_comfort_band(cold in -100.0f64..=0.0, hot in 40.0f64..100.0) {
        prop_assert_eq!(climate_score(cold), 0.0);
        prop_assert_eq!(climate_score(hot), 0.0);
    }

    #[test]
    fn cheaper_scores_strictly_higher_on_cost(dests in candidates(8)) {
        let scored = score(&dests, &WeightVector::default());
        for a in &scored {
            for b in &scored {
                if a.destination.total_cost() < b.destination.total_cost() {
                    prop_assert!(a.category_scores.cost > b.category_scores.cost);
                }
            }
        }
    }

    #[test]
    fn category_scores_stay_within_bounds(dests in candidates(8)) {
        for s in score(&dests, &WeightVector::default()) {
            for c in Category::ALL {
                let v = s.category_scores.get(c);
                prop_assert!((0.0..=100.0 + 1e-9).contains(&v), "{} = {}", c, v);
            }
        }
    }

    #[test]
    fn weights_summing_to_100_bound_the_score(
        dests in candidates(8),
        weights in weights_summing_to_100(),
    ) {
        for s in score(&dests, &weights) {
            prop_assert!(s.weighted_score >= 0.0);
            prop_assert!(s.weighted_score <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn raising_a_threshold_never_grows_the_set(
        dests in candidates(10),
        category in category_strategy(),
        low in 0.0f64..=100.0,
        extra in 0.0f64..=100.0,
    ) {
        let high = (low + extra).min(100.0);
        let weights = WeightVector::default();
        let loose = filter(
            score(&dests, &weights),
            &FilterThresholds::default().with(category, low),
        );
        let strict = filter(
            score(&dests, &weights),
            &FilterThresholds::default().with(category, high),
        );
        prop_assert!(strict.len() <= loose.len());
    }

    #[test]
    fn ranking_is_stable_for_ties(values in proptest::collection::vec(0u8..4, 1..12)) {
        let dests: Vec<Destination> = values
            .iter()
            .enumerate()
            .map(|(i, _)| Destination {
                id: i.to_string(),
                name: None,
                country: None,
                rating: 0.0,
                review_count: 0,
                poi_count: 0,
                safety_overall: None,
                costs: Costs::default(),
                climate_avg_temp_c: None,
                walkability: None,
                budget_tier: BudgetTier::Budget,
            })
            .collect();
        let zero = CategoryScores {
            rating: 0.0,
            safety: 0.0,
            cost: 0.0,
            climate: 0.0,
            activities: 0.0,
            walkability: 0.0,
        };
        let scored = dests
            .iter()
            .zip(&values)
            .map(|(d, v)| ScoredDestination {
                destination: d,
                category_scores: zero,
                weighted_score: f64::from(*v) * 10.0,
            })
            .collect();

        let ranked = rank(scored);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0].scored, &pair[1].scored);
            prop_assert!(a.weighted_score >= b.weighted_score);
            if a.weighted_score == b.weighted_score {
                let ia: usize = a.destination.id.parse().unwrap();
                let ib: usize = b.destination.id.parse().unwrap();
                prop_assert!(ia < ib);
            }
        }
    }

    #[test]
    fn zero_weights_always_score_zero(scores in proptest::array::uniform6(0.0f64..=100.0)) {
        let category_scores = CategoryScores {
            rating: scores[0],
            safety: scores[1],
            cost: scores[2],
            climate: scores[3],
            activities: scores[4],
            walkability: scores[5],
        };
        prop_assert_eq!(weighted_score(&category_scores, &WeightVector::ZERO), 0.0);
    }
}
