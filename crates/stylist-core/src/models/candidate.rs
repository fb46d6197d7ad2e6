use serde::{Deserialize, Serialize};

/// A recommendable item, as returned by the backing store or similarity
/// index. The orchestrator holds read-only copies for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable canonical id, unique across backends.
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    /// Price in KRW; absent for items without price data.
    pub price: Option<u32>,
    pub rating_avg: f64,
    pub review_count: u64,
    /// Number of size options offered.
    pub size_count: u32,
    /// Style keywords / tags.
    pub tags: Vec<String>,
    /// Raw relevance signal from the producing backend (similarity score or
    /// text-search rank score). Zero when the backend provides none.
    #[serde(default)]
    pub relevance: f64,
}

impl Candidate {
    /// Whether this candidate carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
