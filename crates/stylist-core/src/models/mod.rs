//! Data model for the recommendation core.

mod candidate;
mod confidence;
mod constraint;
mod evaluation;
mod intent;
mod preference;
mod result;
mod retrieval;
mod session;
mod turn;
mod utterance;

pub use candidate::Candidate;
pub use confidence::Confidence;
pub use constraint::{
    CmpOp, Constraint, ConstraintKind, ConstraintSet, FeedbackSignal, PriceBand, SizeBound,
    SizeDimension,
};
pub use evaluation::{EvaluationReport, QualityLevel, Suggestion};
pub use intent::{FeedbackKind, IntentKind, IntentResult};
pub use preference::{ObservedValue, PreferenceKey, PreferenceProfile};
pub use result::{RecommendationResult, ScoreBreakdown, ScoredCandidate};
pub use retrieval::{RetrievalRequest, StorePredicate};
pub use session::SessionState;
pub use turn::{TurnOutput, TurnState};
pub use utterance::Utterance;
