//! The four sub-score computations.
//!
//! All return values in [0, 1]. Fixed fallbacks keep degenerate inputs
//! deterministic: diversity 0.5 under two items, novelty 0.7 with no
//! history, vacuous constraint coverage 1.0.

use std::collections::HashSet;

use stylist_core::constants::{DIVERSITY_SINGLETON, NOVELTY_NO_HISTORY};
use stylist_core::models::{
    Candidate, Constraint, ConstraintSet, PreferenceProfile, RecommendationResult,
};

use crate::evaluator::EvaluationContext;

/// relevance = 0.3·query/name overlap + 0.3·preference match
///           + 0.2·constraint match + 0.2·mean confidence.
pub fn relevance(result: &RecommendationResult, ctx: &EvaluationContext) -> f64 {
    let keyword = query_overlap(result, &ctx.query);
    let preference = preference_alignment(result, &ctx.preferences);
    let constraint = constraint_alignment(result, &ctx.constraints);
    let confidence = result.mean_confidence().min(1.0);
    0.3 * keyword + 0.3 * preference + 0.2 * constraint + 0.2 * confidence
}

/// diversity = 0.4·category spread + 0.4·tag spread + 0.2·price dispersion.
pub fn diversity(result: &RecommendationResult) -> f64 {
    if result.len() < 2 {
        return DIVERSITY_SINGLETON;
    }
    let items = &result.items;

    let categories: HashSet<&str> =
        items.iter().map(|s| s.candidate.category.as_str()).collect();
    let category_spread = categories.len() as f64 / items.len() as f64;

    let total_tags: usize = items.iter().map(|s| s.candidate.tags.len()).sum();
    let distinct_tags: HashSet<&str> = items
        .iter()
        .flat_map(|s| s.candidate.tags.iter().map(String::as_str))
        .collect();
    let tag_spread = if total_tags == 0 {
        0.0
    } else {
        distinct_tags.len() as f64 / total_tags as f64
    };

    0.4 * category_spread + 0.4 * tag_spread + 0.2 * price_dispersion(items.iter().map(|s| &s.candidate))
}

/// Fraction of items the user has not already seen.
pub fn novelty(result: &RecommendationResult, seen_ids: &HashSet<String>) -> f64 {
    if seen_ids.is_empty() {
        return NOVELTY_NO_HISTORY;
    }
    if result.is_empty() {
        return 0.0;
    }
    let fresh = result.ids().filter(|id| !seen_ids.contains(*id)).count();
    fresh as f64 / result.len() as f64
}

/// coverage = 0.4·count ratio + 0.3·filters hit + 0.3·preferences hit.
pub fn coverage(result: &RecommendationResult, ctx: &EvaluationContext) -> f64 {
    let count_ratio = if ctx.requested_count == 0 {
        1.0
    } else {
        (result.len() as f64 / ctx.requested_count as f64).min(1.0)
    };
    let filters = filters_covered(result, &ctx.constraints);
    let preferences = preferences_covered(result, &ctx.preferences);
    0.4 * count_ratio + 0.3 * filters + 0.3 * preferences
}

/// Does the candidate satisfy this constraint? `None` when the constraint
/// is not checkable against catalog fields (size bounds, feedback signals).
pub fn constraint_matches(candidate: &Candidate, constraint: &Constraint) -> Option<bool> {
    match constraint {
        Constraint::Category(v) => Some(candidate.category == *v),
        Constraint::Style(v) => Some(candidate.has_tag(v)),
        Constraint::Color(v) => Some(candidate.name.contains(v.as_str())),
        Constraint::Brand(v) => Some(candidate.brand.as_deref() == Some(v.as_str())),
        Constraint::PriceBand(band) => {
            let price = candidate.price?;
            Some(band.contains(price))
        }
        Constraint::Size(_) | Constraint::Feedback(_) => None,
    }
}

/// Mean over result items of the fraction of query tokens found in the
/// item's name or tags.
fn query_overlap(result: &RecommendationResult, query: &str) -> f64 {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.is_empty() || result.is_empty() {
        return 0.0;
    }
    let per_item: f64 = result
        .items
        .iter()
        .map(|s| {
            let hits = tokens
                .iter()
                .filter(|t| {
                    s.candidate.name.contains(**t)
                        || s.candidate.tags.iter().any(|tag| tag == **t)
                })
                .count();
            hits as f64 / tokens.len() as f64
        })
        .sum();
    per_item / result.len() as f64
}

/// Fraction of items matching at least one observed preference value.
/// Neutral 0.5 when no profile exists to align with.
fn preference_alignment(result: &RecommendationResult, preferences: &PreferenceProfile) -> f64 {
    if preferences.is_empty() {
        return 0.5;
    }
    if result.is_empty() {
        return 0.0;
    }
    let aligned = result
        .items
        .iter()
        .filter(|s| {
            preferences.all_values().any(|(_, observed)| {
                let value = observed.value.as_str();
                s.candidate.has_tag(value)
                    || s.candidate.category == value
                    || s.candidate.brand.as_deref() == Some(value)
            })
        })
        .count();
    aligned as f64 / result.len() as f64
}

/// Mean over items of the fraction of checkable constraints the item
/// satisfies. Vacuously 1.0 with nothing to check.
fn constraint_alignment(result: &RecommendationResult, constraints: &ConstraintSet) -> f64 {
    let checkable: Vec<&Constraint> = constraints
        .iter()
        .filter(|c| !matches!(c, Constraint::Size(_) | Constraint::Feedback(_)))
        .collect();
    if checkable.is_empty() {
        return 1.0;
    }
    if result.is_empty() {
        return 0.0;
    }
    let per_item: f64 = result
        .items
        .iter()
        .map(|s| {
            let hits = checkable
                .iter()
                .filter(|c| constraint_matches(&s.candidate, c).unwrap_or(false))
                .count();
            hits as f64 / checkable.len() as f64
        })
        .sum();
    per_item / result.len() as f64
}

/// Fraction of checkable filters satisfied by at least one result item.
fn filters_covered(result: &RecommendationResult, constraints: &ConstraintSet) -> f64 {
    let checkable: Vec<&Constraint> = constraints
        .iter()
        .filter(|c| !matches!(c, Constraint::Size(_) | Constraint::Feedback(_)))
        .collect();
    if checkable.is_empty() {
        return 1.0;
    }
    let covered = checkable
        .iter()
        .filter(|c| {
            result
                .items
                .iter()
                .any(|s| constraint_matches(&s.candidate, c).unwrap_or(false))
        })
        .count();
    covered as f64 / checkable.len() as f64
}

/// Fraction of observed preference values matched by at least one item.
fn preferences_covered(result: &RecommendationResult, preferences: &PreferenceProfile) -> f64 {
    let mut total = 0usize;
    let mut covered = 0usize;
    for (_, observed) in preferences.all_values() {
        total += 1;
        let value = observed.value.as_str();
        let hit = result.items.iter().any(|s| {
            s.candidate.has_tag(value)
                || s.candidate.category == value
                || s.candidate.brand.as_deref() == Some(value)
        });
        if hit {
            covered += 1;
        }
    }
    if total == 0 {
        1.0
    } else {
        covered as f64 / total as f64
    }
}

/// (max − min) / max over items that carry a price; 0.0 under two prices.
fn price_dispersion<'a>(candidates: impl Iterator<Item = &'a Candidate>) -> f64 {
    let prices: Vec<u32> = candidates.filter_map(|c| c.price).collect();
    if prices.len() < 2 {
        return 0.0;
    }
    let max = *prices.iter().max().unwrap_or(&0);
    let min = *prices.iter().min().unwrap_or(&0);
    if max == 0 {
        0.0
    } else {
        (max - min) as f64 / max as f64
    }
}
