use serde::{Deserialize, Serialize};

use super::evaluation::EvaluationReport;
use super::intent::{FeedbackKind, IntentResult};
use super::result::RecommendationResult;
use super::utterance::Utterance;
use crate::constants::MAX_ADJUSTMENTS;

/// Mutable aggregate threaded through one orchestration run (one user
/// turn). Created at turn start, discarded after response assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnState {
    pub session_id: String,
    pub utterance: Utterance,
    pub intent: Option<IntentResult>,
    pub result: Option<RecommendationResult>,
    pub report: Option<EvaluationReport>,
    /// Bounded by [`MAX_ADJUSTMENTS`]; the state machine must terminate the
    /// adjustment loop once the ceiling is reached.
    pub adjustment_count: u8,
    /// Set when the loop terminated purely because the bound was reached.
    pub bound_reached: bool,
    pub feedback: Option<FeedbackKind>,
    /// Degraded-mode note when a collaborator failed mid-turn.
    pub degraded: Option<String>,
}

impl TurnState {
    pub fn new(session_id: String, utterance: Utterance) -> Self {
        Self {
            session_id,
            utterance,
            intent: None,
            result: None,
            report: None,
            adjustment_count: 0,
            bound_reached: false,
            feedback: None,
            degraded: None,
        }
    }

    /// Whether another adjustment pass is allowed.
    pub fn can_adjust(&self) -> bool {
        self.adjustment_count < MAX_ADJUSTMENTS
    }

    pub fn record_adjustment(&mut self) {
        debug_assert!(self.can_adjust());
        self.adjustment_count += 1;
    }
}

/// What the orchestrator hands back to the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutput {
    pub response_text: String,
    pub recommendations: RecommendationResult,
    pub report: Option<EvaluationReport>,
    pub error: Option<String>,
}
