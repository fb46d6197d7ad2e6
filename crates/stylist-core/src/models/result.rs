use serde::{Deserialize, Serialize};

use super::candidate::Candidate;

/// Per-signal contributions that sum to the final confidence.
///
/// A closed struct rather than a name→value map: the signal set is fixed,
/// and every consumer matches on all of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_relevance: f64,
    pub review_volume: f64,
    pub rating: f64,
    pub attribute_diversity: f64,
    pub preference_overlap: f64,
    pub query_match: f64,
}

impl ScoreBreakdown {
    /// Sum of all contributions; equals the candidate's confidence.
    pub fn total(&self) -> f64 {
        self.base_relevance
            + self.review_volume
            + self.rating
            + self.attribute_diversity
            + self.preference_overlap
            + self.query_match
    }
}

/// A candidate with its computed ranking key. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Final confidence in [0.0, 1.0].
    pub confidence: f64,
    pub components: ScoreBreakdown,
}

/// Ordered, capped recommendation set.
///
/// Rank-stable: descending confidence, ties broken by ascending price
/// (missing price last) then ascending id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub items: Vec<ScoredCandidate>,
    pub requested_count: usize,
}

impl RecommendationResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|s| s.candidate.id.as_str())
    }

    /// Mean confidence over the result, 0.0 when empty.
    pub fn mean_confidence(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.items.iter().map(|s| s.confidence).sum::<f64>() / self.items.len() as f64
    }
}
