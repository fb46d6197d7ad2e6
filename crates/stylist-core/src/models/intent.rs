use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::constraint::ConstraintSet;

/// Intent class for a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    RecommendationRequest,
    Feedback,
    InformationRequest,
    General,
}

/// Turn-level feedback classification, applied to the follow-up utterance
/// after a recommendation has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Positive,
    ConditionChange,
    Negative,
    MoreItems,
    Behavior,
}

/// Output of the intent & slot extractor. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    pub kind: IntentKind,
    pub confidence: Confidence,
    pub constraints: ConstraintSet,
    pub requires_retrieval: bool,
}

impl IntentResult {
    pub fn new(
        kind: IntentKind,
        confidence: f64,
        constraints: ConstraintSet,
        requires_retrieval: bool,
    ) -> Self {
        Self {
            kind,
            confidence: Confidence::new(confidence),
            constraints,
            requires_retrieval,
        }
    }
}
