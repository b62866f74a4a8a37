use super::Catalog;
use std::collections::HashSet;

/// Validate catalog records after loading.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, dest) in catalog.destinations.iter().enumerate() {
        let path = format!("destinations[{}]", i);

        if dest.id.trim().is_empty() {
            errors.push(format!("{}.id: must not be empty", path));
        } else if !seen_ids.insert(dest.id.to_ascii_lowercase()) {
            errors.push(format!("{}.id: duplicate id '{}'", path, dest.id));
        }

        if !dest.rating.is_finite() {
            errors.push(format!("{}.rating: must be a finite number", path));
        }

        let optional = [
            ("safety_overall", dest.safety_overall),
            ("climate_avg_temp_c", dest.climate_avg_temp_c),
            ("walkability", dest.walkability),
        ];
        for (field, value) in optional {
            if let Some(v) = value {
                if !v.is_finite() {
                    errors.push(format!("{}.{}: must be a finite number", path, field));
                }
            }
        }

        let costs = [
            ("accommodation", dest.costs.accommodation),
            ("food", dest.costs.food),
            ("activities", dest.costs.activities),
            ("transport", dest.costs.transport),
        ];
        for (field, value) in costs {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "{}.costs.{}: must be a non-negative number",
                    path, field
                ));
            }
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
    use crate::catalog::{BudgetTier, Costs, Destination};

    fn destination(id: &str) -> Destination {
        Destination {
            id: id.to_string(),
            name: None,
            country: None,
            rating: 4.0,
            review_count: 10,
            poi_count: 100,
            safety_overall: Some(7.0),
            costs: Costs {
                accommodation: 50.0,
                food: 20.0,
                activities: 10.0,
                transport: 5.0,
            },
            climate_avg_temp_c: Some(20.0),
            walkability: None,
            budget_tier: BudgetTier::Budget,
        }
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = Catalog::new(vec![destination("a"), destination("b")]);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::default()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_case_insensitive() {
        let catalog = Catalog::new(vec![destination("Paris"), destination("paris")]);
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("destinations[1].id"));
        assert!(errors[0].contains("duplicate"));
    }

    #[test]
    fn test_empty_id() {
        let catalog = Catalog::new(vec![destination("  ")]);
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("destinations[0].id"));
    }

    #[test]
    fn test_negative_cost() {
        let mut dest = destination("a");
        dest.costs.food = -5.0;
        let errors = validate_catalog(&Catalog::new(vec![dest])).unwrap_err();
        assert!(errors[0].contains("destinations[0].costs.food"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut first = destination("a");
        first.rating = f64::NAN;
        first.walkability = Some(f64::INFINITY);
        let mut second = destination("a");
        second.costs.transport = -1.0;

        let errors = validate_catalog(&Catalog::new(vec![first, second])).unwrap_err();
        // NaN rating, infinite walkability, duplicate id, negative transport
        assert_eq!(errors.len(), 4);
    }
}
