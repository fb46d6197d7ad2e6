use serde::{Deserialize, Serialize};

use crate::constants;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// How many recommendations a turn should return.
    pub requested_count: usize,
    /// Per-stage fetch size is `requested_count * fetch_multiplier`.
    pub fetch_multiplier: usize,
    /// Popularity floor applied by the final fallback stage.
    pub popularity_min_rating: f64,
    pub popularity_min_reviews: u64,
    /// Per-call timeout collaborator implementations should enforce (ms).
    pub call_timeout_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            requested_count: constants::DEFAULT_REQUESTED_COUNT,
            fetch_multiplier: constants::FETCH_MULTIPLIER,
            popularity_min_rating: constants::POPULARITY_MIN_RATING,
            popularity_min_reviews: constants::POPULARITY_MIN_REVIEWS,
            call_timeout_ms: constants::DEFAULT_CALL_TIMEOUT_MS,
        }
    }
}

impl RetrievalConfig {
    /// Fetch size for a single pipeline stage.
    pub fn stage_fetch(&self) -> usize {
        self.requested_count * self.fetch_multiplier
    }
}
