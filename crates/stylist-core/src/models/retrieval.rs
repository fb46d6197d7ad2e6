use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::constraint::{ConstraintSet, SizeBound};
use super::preference::PreferenceProfile;

/// Everything one retrieval attempt needs. Immutable once issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalRequest {
    pub query_text: String,
    pub constraints: ConstraintSet,
    pub preferences: PreferenceProfile,
    pub requested_count: usize,
    /// Candidate ids that must not appear in the result (already shown,
    /// or excluded by feedback).
    pub exclusions: HashSet<String>,
    /// Minimum confidence a scored candidate must reach to be returned.
    /// Raised by the adjustment loop, zero by default.
    #[serde(default)]
    pub confidence_floor: f64,
}

/// The equality/range predicate translation of a constraint set, handed to
/// the relational collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorePredicate {
    pub category: Option<String>,
    /// Required tags (style keywords). All must match.
    pub tags: Vec<String>,
    pub brand: Option<String>,
    /// Color keyword matched against the item name.
    pub color: Option<String>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub size_bounds: Vec<SizeBound>,
    pub min_rating: Option<f64>,
    pub min_review_count: Option<u64>,
    pub exclude_ids: Vec<String>,
    pub limit: usize,
}

impl StorePredicate {
    /// Number of filter conditions carried (excluding exclusions and limit).
    pub fn condition_count(&self) -> usize {
        self.category.is_some() as usize
            + self.tags.len()
            + self.brand.is_some() as usize
            + self.color.is_some() as usize
            + (self.price_min.is_some() || self.price_max.is_some()) as usize
            + self.size_bounds.len()
            + (self.min_rating.is_some() || self.min_review_count.is_some()) as usize
    }
}
