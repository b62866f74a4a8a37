use super::config::{Category, FilterThresholds, WeightVector};

/// Upper bound of a filter threshold (scores live on a 0-100 scale)
pub const MAX_THRESHOLD: f64 = 100.0;

/// Validate weights and thresholds at startup.
/// Returns all validation errors at once (not just the first).
///
/// Weight totals are not checked: any non-negative combination is legal.
pub fn validate_preferences(
    weights: &WeightVector,
    thresholds: &FilterThresholds,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for category in Category::ALL {
        let weight = weights.get(category);
        if !weight.is_finite() {
            errors.push(format!("weights.{}: must be a finite number", category));
        } else if weight < 0.0 {
            errors.push(format!("weights.{}: must be non-negative", category));
        }
    }

    for category in Category::ALL {
        let threshold = thresholds.get(category);
        if !threshold.is_finite() || !(0.0..=MAX_THRESHOLD).contains(&threshold) {
            errors.push(format!(
                "filters.{}: must be between 0 and {}",
                category, MAX_THRESHOLD
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(
            validate_preferences(&WeightVector::default(), &FilterThresholds::default()).is_ok()
        );
    }

    #[test]
    fn test_zero_weights_are_valid() {
        assert!(validate_preferences(&WeightVector::ZERO, &FilterThresholds::default()).is_ok());
    }

    #[test]
    fn test_weights_over_100_are_valid() {
        let weights = WeightVector::default().with(Category::Cost, 50.0);
        assert!(validate_preferences(&weights, &FilterThresholds::default()).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let weights = WeightVector::default().with(Category::Safety, -1.0);
        let errors = validate_preferences(&weights, &FilterThresholds::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("weights.safety"));
    }

    #[test]
    fn test_nan_weight() {
        let weights = WeightVector::default().with(Category::Rating, f64::NAN);
        let errors = validate_preferences(&weights, &FilterThresholds::default()).unwrap_err();
        assert!(errors[0].contains("weights.rating"));
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let thresholds = FilterThresholds::default().with(Category::Climate, 101.0);
        let errors = validate_preferences(&WeightVector::default(), &thresholds).unwrap_err();
        assert!(errors[0].contains("filters.climate"));
    }

    #[test]
    fn test_threshold_bounds_inclusive() {
        let thresholds = FilterThresholds::default()
            .with(Category::Cost, 100.0)
            .with(Category::Rating, 0.0);
        assert!(validate_preferences(&WeightVector::default(), &thresholds).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let weights = WeightVector::default()
            .with(Category::Cost, -5.0)
            .with(Category::Climate, f64::INFINITY);
        let thresholds = FilterThresholds::default().with(Category::Walkability, -10.0);
        let errors = validate_preferences(&weights, &thresholds).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
