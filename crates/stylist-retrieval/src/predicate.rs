//! Constraint-set to store-predicate translation.

use std::collections::HashSet;

use stylist_core::config::RetrievalConfig;
use stylist_core::models::{Constraint, ConstraintSet, StorePredicate};

/// Translate a constraint set into an equality/range predicate. Feedback
/// signals carry no filterable value and are skipped; the orchestrator folds
/// them into concrete constraints before retrieval.
pub fn from_constraints(
    constraints: &ConstraintSet,
    exclusions: &HashSet<String>,
    limit: usize,
) -> StorePredicate {
    let mut predicate = StorePredicate {
        limit,
        exclude_ids: exclusions.iter().cloned().collect(),
        ..StorePredicate::default()
    };
    for constraint in constraints.iter() {
        match constraint {
            Constraint::Category(v) => predicate.category = Some(v.clone()),
            Constraint::Style(v) => predicate.tags.push(v.clone()),
            Constraint::Color(v) => predicate.color = Some(v.clone()),
            Constraint::Brand(v) => predicate.brand = Some(v.clone()),
            Constraint::PriceBand(band) => {
                let (min, max) = band.price_range();
                predicate.price_min = min;
                predicate.price_max = max;
            }
            Constraint::Size(bound) => predicate.size_bounds.push(*bound),
            Constraint::Feedback(_) => {}
        }
    }
    predicate
}

/// The stage-7 predicate: no constraints, only the popularity floor.
pub fn popularity_floor(
    config: &RetrievalConfig,
    exclusions: &HashSet<String>,
    limit: usize,
) -> StorePredicate {
    StorePredicate {
        min_rating: Some(config.popularity_min_rating),
        min_review_count: Some(config.popularity_min_reviews),
        exclude_ids: exclusions.iter().cloned().collect(),
        limit,
        ..StorePredicate::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::constants::{PRICE_BUDGET_MAX_WON, PRICE_MID_MAX_WON};
    use stylist_core::models::PriceBand;

    #[test]
    fn translates_all_slot_kinds() {
        let constraints: ConstraintSet = vec![
            Constraint::Category("상의".into()),
            Constraint::Style("베이직".into()),
            Constraint::PriceBand(PriceBand::Budget),
        ]
        .into_iter()
        .collect();
        let predicate = from_constraints(&constraints, &HashSet::new(), 10);
        assert_eq!(predicate.category.as_deref(), Some("상의"));
        assert_eq!(predicate.tags, vec!["베이직".to_string()]);
        assert_eq!(predicate.price_max, Some(PRICE_BUDGET_MAX_WON));
        assert_eq!(predicate.price_min, None);
        assert_eq!(predicate.limit, 10);
        assert_eq!(predicate.condition_count(), 3);
    }

    #[test]
    fn mid_band_is_a_closed_range() {
        let constraints: ConstraintSet =
            std::iter::once(Constraint::PriceBand(PriceBand::Mid)).collect();
        let predicate = from_constraints(&constraints, &HashSet::new(), 5);
        assert_eq!(predicate.price_min, Some(PRICE_BUDGET_MAX_WON));
        assert_eq!(predicate.price_max, Some(PRICE_MID_MAX_WON));
    }

    #[test]
    fn popularity_floor_has_no_slot_filters() {
        let config = RetrievalConfig::default();
        let predicate = popularity_floor(&config, &HashSet::new(), 10);
        assert!(predicate.category.is_none());
        assert!(predicate.tags.is_empty());
        assert_eq!(predicate.min_rating, Some(4.0));
        assert_eq!(predicate.min_review_count, Some(100));
    }
}
