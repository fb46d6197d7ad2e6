//! Deterministic ordering and capping of scored candidates.

use std::cmp::Ordering;

use tracing::debug;

use stylist_core::models::{Candidate, PreferenceProfile, RecommendationResult, ScoredCandidate};

use crate::scorer::Scorer;

/// Score, filter by the confidence floor, order, and cap.
pub fn rank(
    scorer: &Scorer,
    candidates: &[Candidate],
    preferences: &PreferenceProfile,
    query_text: &str,
    requested_count: usize,
    confidence_floor: f64,
) -> RecommendationResult {
    let mut items: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|c| scorer.score(c, preferences, query_text))
        .filter(|s| s.confidence >= confidence_floor)
        .collect();
    items.sort_by(compare);
    items.truncate(requested_count);
    debug!(
        ranked = items.len(),
        requested = requested_count,
        floor = confidence_floor,
        "ranking finished"
    );
    RecommendationResult { items, requested_count }
}

/// Confidence descending, then price ascending with missing prices last,
/// then id ascending. Total order, so sort output is reproducible.
fn compare(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| match (a.candidate.price, b.candidate.price) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}
