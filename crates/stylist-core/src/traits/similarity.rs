use crate::errors::RetrievalError;
use crate::models::{Candidate, StorePredicate};

/// Approximate nearest-neighbor index over item embeddings.
///
/// How embeddings are computed is out of scope; the core only consumes the
/// ordered neighbor list. `Candidate::relevance` carries the similarity
/// score.
pub trait ISimilarityIndex: Send + Sync {
    fn nearest(
        &self,
        query: &str,
        k: usize,
        filter: Option<&StorePredicate>,
    ) -> Result<Vec<Candidate>, RetrievalError>;
}
