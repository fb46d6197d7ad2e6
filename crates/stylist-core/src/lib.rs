//! # stylist-core
//!
//! Foundation crate for the stylist recommendation system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StylistConfig;
pub use errors::{StylistError, StylistResult};
pub use models::{
    Candidate, Confidence, Constraint, ConstraintSet, EvaluationReport, FeedbackKind,
    IntentKind, IntentResult, PreferenceProfile, QualityLevel, RecommendationResult,
    RetrievalRequest, ScoredCandidate, SessionState, StorePredicate, Suggestion, TurnState,
    Utterance,
};
