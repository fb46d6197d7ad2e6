use crate::errors::RetrievalError;
use crate::models::{Candidate, StorePredicate};

/// Relational candidate store.
///
/// Accepts an equality/range predicate query and a free-text ranked search.
/// Both return candidates in the backend's relevance order; `Candidate::
/// relevance` carries the rank score where the backend provides one.
pub trait ICandidateStore: Send + Sync {
    /// Structured query over the predicate's conditions.
    fn query(&self, predicate: &StorePredicate) -> Result<Vec<Candidate>, RetrievalError>;

    /// Free-text ranked search.
    fn search_text(&self, text: &str, limit: usize) -> Result<Vec<Candidate>, RetrievalError>;
}
