//! Retrieval strategy selection.
//!
//! A decision function over three signals: mood markers in the free text,
//! presence of structured constraints, and query length in characters.
//! Style/tag constraints route to structured search (rule 3) but do not by
//! themselves make a query "structured" for the hybrid/similarity rules:
//! a lone style word is still free-text territory.

use serde::{Deserialize, Serialize};

use stylist_core::constants::{LONG_QUERY_CHARS, MEDIUM_QUERY_CHARS};
use stylist_core::models::ConstraintSet;
use stylist_intent::vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Structured,
    Similarity,
    Hybrid,
}

impl Strategy {
    /// Stage-2 complement: structured and similarity swap, hybrid always
    /// falls back to structured.
    pub fn complement(self) -> Strategy {
        match self {
            Strategy::Structured => Strategy::Similarity,
            Strategy::Similarity => Strategy::Structured,
            Strategy::Hybrid => Strategy::Structured,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Structured => "structured",
            Strategy::Similarity => "similarity",
            Strategy::Hybrid => "hybrid",
        }
    }
}

/// Apply the five selection rules in order; first match wins.
pub fn select_strategy(query_text: &str, constraints: &ConstraintSet) -> Strategy {
    let chars = query_text.trim().chars().count();
    let mood = vocabulary::has_mood_marker(query_text);
    let structured = constraints.has_structured();

    if chars > LONG_QUERY_CHARS && mood && structured {
        return Strategy::Hybrid;
    }
    if chars > LONG_QUERY_CHARS && mood && !structured {
        return Strategy::Similarity;
    }
    if structured || constraints.has_tag_like() {
        return Strategy::Structured;
    }
    if chars > MEDIUM_QUERY_CHARS {
        return Strategy::Hybrid;
    }
    Strategy::Structured
}
