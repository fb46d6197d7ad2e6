//! # stylist-ranking
//!
//! Turns raw retrieval candidates into an ordered recommendation set.
//! Scoring is a pure per-candidate function (fixed normalization caps, no
//! cross-candidate statistics), so results are deterministic and each
//! signal contributes monotonically to the final confidence.

pub mod rank;
pub mod scorer;

pub use rank::rank;
pub use scorer::{Scorer, ScorerWeights};
