//! Composite confidence scoring.

use serde::{Deserialize, Serialize};

use stylist_core::constants::{MAX_RATING, REVIEW_VOLUME_CAP, SIZE_COUNT_CAP};
use stylist_core::models::{Candidate, PreferenceProfile, ScoreBreakdown, ScoredCandidate};

/// Per-signal weights. Must be non-negative and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerWeights {
    pub base_relevance: f64,
    pub review_volume: f64,
    pub rating: f64,
    pub attribute_diversity: f64,
    pub preference_overlap: f64,
    pub query_match: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            base_relevance: 0.40,
            review_volume: 0.15,
            rating: 0.15,
            attribute_diversity: 0.10,
            preference_overlap: 0.10,
            query_match: 0.10,
        }
    }
}

impl ScorerWeights {
    pub fn sum(&self) -> f64 {
        self.base_relevance
            + self.review_volume
            + self.rating
            + self.attribute_diversity
            + self.preference_overlap
            + self.query_match
    }
}

pub struct Scorer {
    weights: ScorerWeights,
}

impl Scorer {
    pub fn new() -> Self {
        Self::with_weights(ScorerWeights::default())
    }

    pub fn with_weights(weights: ScorerWeights) -> Self {
        Self { weights }
    }

    /// Score one candidate against the user's preferences and the raw query
    /// text. Pure: no cross-candidate normalization, no session mutation.
    pub fn score(
        &self,
        candidate: &Candidate,
        preferences: &PreferenceProfile,
        query_text: &str,
    ) -> ScoredCandidate {
        let w = &self.weights;
        let components = ScoreBreakdown {
            base_relevance: w.base_relevance * base_relevance_signal(candidate),
            review_volume: w.review_volume * review_volume_signal(candidate.review_count),
            rating: w.rating * rating_signal(candidate.rating_avg),
            attribute_diversity: w.attribute_diversity
                * attribute_diversity_signal(candidate.size_count),
            preference_overlap: w.preference_overlap
                * preference_overlap_signal(candidate, preferences),
            query_match: w.query_match * query_match_signal(candidate, query_text),
        };
        ScoredCandidate {
            confidence: components.total().clamp(0.0, 1.0),
            components,
            candidate: candidate.clone(),
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

/// rating × log(1 + reviews), normalized against the caps.
fn base_relevance_signal(candidate: &Candidate) -> f64 {
    let raw = candidate.rating_avg * (1.0 + candidate.review_count as f64).ln();
    let max = MAX_RATING * (1.0 + REVIEW_VOLUME_CAP as f64).ln();
    (raw / max).clamp(0.0, 1.0)
}

fn review_volume_signal(review_count: u64) -> f64 {
    let raw = (1.0 + review_count as f64).ln() / (1.0 + REVIEW_VOLUME_CAP as f64).ln();
    raw.clamp(0.0, 1.0)
}

fn rating_signal(rating_avg: f64) -> f64 {
    (rating_avg / MAX_RATING).clamp(0.0, 1.0)
}

fn attribute_diversity_signal(size_count: u32) -> f64 {
    (size_count as f64 / SIZE_COUNT_CAP as f64).clamp(0.0, 1.0)
}

/// Fraction of observed preference values the candidate matches by tag,
/// category, or brand. 0.0 when the profile is empty.
fn preference_overlap_signal(candidate: &Candidate, preferences: &PreferenceProfile) -> f64 {
    let mut total = 0usize;
    let mut matched = 0usize;
    for (_, observed) in preferences.all_values() {
        total += 1;
        let value = observed.value.as_str();
        let hit = candidate.has_tag(value)
            || candidate.category == value
            || candidate.brand.as_deref() == Some(value);
        if hit {
            matched += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

/// Query affinity: the text heuristic below, floored by whatever rank
/// score the producing backend attached to the candidate. A similarity
/// backend that already measured closeness should not lose to a weak
/// token overlap.
fn query_match_signal(candidate: &Candidate, query_text: &str) -> f64 {
    let backend = candidate.relevance.clamp(0.0, 1.0);
    text_match_signal(candidate, query_text).max(backend)
}

/// Exact substring match in the item name scores 1.0; otherwise the
/// fraction of query tokens present scores at half strength.
fn text_match_signal(candidate: &Candidate, query_text: &str) -> f64 {
    let query = query_text.trim();
    if query.is_empty() {
        return 0.0;
    }
    if candidate.name.contains(query) {
        return 1.0;
    }
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let hits = tokens
        .iter()
        .filter(|t| candidate.name.contains(**t) || candidate.tags.iter().any(|tag| tag == **t))
        .count();
    0.5 * hits as f64 / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Candidate {
        Candidate {
            id: "p1".into(),
            name: "베이직 오버핏 티셔츠".into(),
            category: "상의".into(),
            brand: Some("무신사 스탠다드".into()),
            price: Some(19_900),
            rating_avg: 4.5,
            review_count: 800,
            size_count: 5,
            tags: vec!["베이직".into(), "오버핏".into()],
            relevance: 0.0,
        }
    }

    #[test]
    fn default_weights_sum_to_one() {
        assert!((ScorerWeights::default().sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn confidence_stays_in_unit_interval() {
        let scored = Scorer::new().score(&candidate(), &PreferenceProfile::default(), "티셔츠");
        assert!(scored.confidence > 0.0 && scored.confidence <= 1.0);
        assert!((scored.components.total() - scored.confidence).abs() < 1e-9);
    }

    #[test]
    fn backend_rank_score_floors_query_match() {
        let mut c = candidate();
        let weak_text = query_match_signal(&c, "겨울 코트");
        c.relevance = 0.9;
        let floored = query_match_signal(&c, "겨울 코트");
        assert_eq!(weak_text, 0.0);
        assert!((floored - 0.9).abs() < 1e-9);

        // Out-of-range backend scores are clamped, not trusted.
        c.relevance = 3.0;
        assert_eq!(query_match_signal(&c, "겨울 코트"), 1.0);
    }

    #[test]
    fn exact_name_substring_beats_token_overlap() {
        let c = candidate();
        let exact = query_match_signal(&c, "오버핏 티셔츠");
        let partial = query_match_signal(&c, "오버핏 바지");
        assert_eq!(exact, 1.0);
        assert!(partial < exact);
        assert!(partial > 0.0);
    }

    #[test]
    fn preference_overlap_counts_matched_values() {
        let mut prefs = PreferenceProfile::default();
        prefs.observe(stylist_core::models::PreferenceKey::Style, "베이직", 1.0);
        prefs.observe(stylist_core::models::PreferenceKey::Category, "바지", 1.0);
        let overlap = preference_overlap_signal(&candidate(), &prefs);
        assert!((overlap - 0.5).abs() < 1e-9);
    }

    #[test]
    fn higher_rating_never_lowers_confidence() {
        let scorer = Scorer::new();
        let low = candidate();
        let mut high = candidate();
        high.rating_avg = 5.0;
        let prefs = PreferenceProfile::default();
        assert!(
            scorer.score(&high, &prefs, "티셔츠").confidence
                >= scorer.score(&low, &prefs, "티셔츠").confidence
        );
    }
}
