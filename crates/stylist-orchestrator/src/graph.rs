//! The turn state machine as data: nodes plus a pure transition function.
//!
//! Keeping routing separate from node execution makes every guard testable
//! without collaborators.

use stylist_core::models::{FeedbackKind, IntentKind, TurnState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Start,
    IntentAnalysis,
    Retrieval,
    Scoring,
    Evaluation,
    Adjustment,
    FeedbackProcessing,
    ResponseGeneration,
    End,
}

/// Decide the next node from the turn state accumulated so far.
///
/// A set `degraded` note short-circuits any mid-pipeline node straight to
/// response generation.
pub fn transition(node: Node, turn: &TurnState) -> Node {
    if turn.degraded.is_some() && node != Node::ResponseGeneration {
        return Node::ResponseGeneration;
    }
    match node {
        Node::Start => Node::IntentAnalysis,
        Node::IntentAnalysis => match &turn.intent {
            Some(intent) if intent.kind == IntentKind::Feedback => Node::FeedbackProcessing,
            Some(intent) if intent.requires_retrieval => Node::Retrieval,
            _ => Node::ResponseGeneration,
        },
        Node::Retrieval => Node::Scoring,
        Node::Scoring => Node::Evaluation,
        Node::Evaluation => {
            let needs_improvement =
                turn.report.as_ref().map_or(false, |r| r.needs_improvement());
            if needs_improvement && turn.can_adjust() {
                Node::Adjustment
            } else {
                Node::ResponseGeneration
            }
        }
        Node::Adjustment => Node::Retrieval,
        Node::FeedbackProcessing => match turn.feedback {
            Some(FeedbackKind::ConditionChange)
            | Some(FeedbackKind::Negative)
            | Some(FeedbackKind::MoreItems) => Node::Adjustment,
            _ => Node::ResponseGeneration,
        },
        Node::ResponseGeneration | Node::End => Node::End,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::models::{
        EvaluationReport, IntentResult, QualityLevel, Suggestion, Utterance,
    };

    fn turn() -> TurnState {
        TurnState::new("s1".into(), Utterance::new("테스트"))
    }

    fn report(quality: QualityLevel) -> EvaluationReport {
        EvaluationReport {
            relevance: 0.5,
            diversity: 0.5,
            novelty: 0.5,
            coverage: 0.5,
            overall: 0.5,
            quality,
            suggestions: vec![Suggestion::Adequate],
        }
    }

    #[test]
    fn retrieval_intent_routes_to_retrieval() {
        let mut t = turn();
        t.intent = Some(IntentResult::new(
            IntentKind::RecommendationRequest,
            0.8,
            Default::default(),
            true,
        ));
        assert_eq!(transition(Node::IntentAnalysis, &t), Node::Retrieval);
    }

    #[test]
    fn feedback_intent_routes_to_feedback_processing() {
        let mut t = turn();
        t.intent = Some(IntentResult::new(IntentKind::Feedback, 0.7, Default::default(), true));
        assert_eq!(transition(Node::IntentAnalysis, &t), Node::FeedbackProcessing);
    }

    #[test]
    fn weak_report_loops_through_adjustment_until_bound() {
        let mut t = turn();
        t.report = Some(report(QualityLevel::NeedsImprovement));
        assert_eq!(transition(Node::Evaluation, &t), Node::Adjustment);
        t.record_adjustment();
        t.record_adjustment();
        assert_eq!(transition(Node::Evaluation, &t), Node::ResponseGeneration);
    }

    #[test]
    fn good_report_goes_straight_to_response() {
        let mut t = turn();
        t.report = Some(report(QualityLevel::Good));
        assert_eq!(transition(Node::Evaluation, &t), Node::ResponseGeneration);
    }

    #[test]
    fn degraded_turn_short_circuits() {
        let mut t = turn();
        t.degraded = Some("store down".into());
        assert_eq!(transition(Node::Retrieval, &t), Node::ResponseGeneration);
        assert_eq!(transition(Node::Adjustment, &t), Node::ResponseGeneration);
    }

    #[test]
    fn positive_feedback_goes_to_response() {
        let mut t = turn();
        t.feedback = Some(FeedbackKind::Positive);
        assert_eq!(transition(Node::FeedbackProcessing, &t), Node::ResponseGeneration);
    }

    #[test]
    fn condition_change_goes_to_adjustment() {
        let mut t = turn();
        t.feedback = Some(FeedbackKind::ConditionChange);
        assert_eq!(transition(Node::FeedbackProcessing, &t), Node::Adjustment);
    }
}
