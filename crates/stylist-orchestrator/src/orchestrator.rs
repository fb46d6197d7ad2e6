//! The turn driver.

use std::sync::Arc;

use tracing::{debug, info, warn};

use stylist_core::config::StylistConfig;
use stylist_core::models::{
    Candidate, FeedbackKind, IntentKind, RecommendationResult, TurnOutput, TurnState, Utterance,
};
use stylist_core::traits::{
    ICandidateStore, IFeedbackSink, IGenerativeModel, ISessionStore, ISimilarityIndex,
};
use stylist_eval::{EvaluationContext, Evaluator};
use stylist_intent::{FeedbackDetector, IntentExtractor};
use stylist_ranking::{rank, Scorer};
use stylist_retrieval::RetrievalPipeline;
use stylist_session::SessionManager;

use crate::adjust::RetrievalPlan;
use crate::graph::{transition, Node};
use crate::response;

pub struct Orchestrator {
    config: StylistConfig,
    extractor: IntentExtractor,
    scorer: Scorer,
    evaluator: Evaluator,
    store: Arc<dyn ICandidateStore>,
    index: Arc<dyn ISimilarityIndex>,
    sink: Arc<dyn IFeedbackSink>,
    sessions: Arc<dyn ISessionStore>,
}

impl Orchestrator {
    pub fn new(
        config: StylistConfig,
        store: Arc<dyn ICandidateStore>,
        index: Arc<dyn ISimilarityIndex>,
        sink: Arc<dyn IFeedbackSink>,
    ) -> Self {
        let evaluator = Evaluator::new(config.evaluation.clone());
        let sessions: Arc<dyn ISessionStore> =
            Arc::new(SessionManager::new(config.session.clone()));
        Self {
            config,
            extractor: IntentExtractor::new(),
            scorer: Scorer::new(),
            evaluator,
            store,
            index,
            sink,
            sessions,
        }
    }

    /// Route intent analysis through a language service, keeping the
    /// rule-based fallback.
    pub fn with_model(mut self, model: Box<dyn IGenerativeModel>) -> Self {
        self.extractor = IntentExtractor::with_model(model);
        self
    }

    /// Replace the default in-process session store.
    pub fn with_session_store(mut self, sessions: Arc<dyn ISessionStore>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn sessions(&self) -> &Arc<dyn ISessionStore> {
        &self.sessions
    }

    /// Process one user turn end to end. Never panics and never returns a
    /// transport error: the worst case is a degraded apology in
    /// `response_text` with `error` set.
    pub fn process_turn(&self, session_id: &str, text: &str) -> TurnOutput {
        let session_arc = self.sessions.checkout(session_id);
        let mut session = match session_arc.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let utterance = Utterance::new(text);
        let mut turn = TurnState::new(session_id.to_string(), utterance);
        let mut plan = RetrievalPlan::new(turn.utterance.text.clone(), Default::default());
        let mut candidates: Vec<Candidate> = Vec::new();
        let requested = self.config.retrieval.requested_count;

        let mut node = Node::Start;
        loop {
            match node {
                Node::Start | Node::End => {}
                Node::IntentAnalysis => {
                    let intent = self.extractor.extract(&turn.utterance, Some(&session));
                    debug!(session_id, kind = ?intent.kind, "intent analyzed");
                    plan = RetrievalPlan::new(
                        turn.utterance.text.clone(),
                        intent.constraints.clone(),
                    );
                    turn.intent = Some(intent);
                }
                Node::FeedbackProcessing => {
                    let kind = FeedbackDetector::classify(&turn.utterance.text);
                    debug!(session_id, ?kind, "feedback classified");
                    turn.feedback = kind;
                    match kind {
                        Some(FeedbackKind::Positive) => self.record_positive(&session, &turn),
                        Some(
                            k @ (FeedbackKind::ConditionChange
                            | FeedbackKind::Negative
                            | FeedbackKind::MoreItems),
                        ) => {
                            let signal = turn
                                .intent
                                .as_ref()
                                .and_then(|i| i.constraints.feedback());
                            plan.apply_feedback(k, signal, &session.last_result_ids);
                        }
                        Some(FeedbackKind::Behavior) | None => {}
                    }
                }
                Node::Retrieval => {
                    let request = plan.to_request(session.preferences.clone(), requested);
                    let pipeline = RetrievalPipeline::new(
                        self.store.as_ref(),
                        self.index.as_ref(),
                        &self.config.retrieval,
                    );
                    match pipeline.run(&request) {
                        Ok(outcome) => {
                            candidates = outcome.candidates;
                        }
                        Err(e) => {
                            warn!(session_id, error = %e, "retrieval failed, degrading turn");
                            turn.degraded = Some(e.to_string());
                        }
                    }
                }
                Node::Scoring => {
                    turn.result = Some(rank(
                        &self.scorer,
                        &candidates,
                        &session.preferences,
                        &plan.query_text,
                        requested,
                        plan.confidence_floor,
                    ));
                }
                Node::Evaluation => {
                    let ctx = EvaluationContext {
                        query: plan.query_text.clone(),
                        constraints: plan.constraints.clone(),
                        preferences: session.preferences.clone(),
                        requested_count: requested,
                        seen_ids: session.seen_ids.clone(),
                    };
                    let empty = RecommendationResult::default();
                    let result = turn.result.as_ref().unwrap_or(&empty);
                    let report = self.evaluator.evaluate(result, &ctx);
                    if report.needs_improvement() && !turn.can_adjust() {
                        turn.bound_reached = true;
                    }
                    turn.report = Some(report);
                }
                Node::Adjustment => {
                    turn.record_adjustment();
                    if let Some(report) = &turn.report {
                        plan.apply_suggestions(&report.suggestions, &session.seen_ids);
                    }
                    debug!(session_id, pass = turn.adjustment_count, "adjustment pass");
                }
                Node::ResponseGeneration => {
                    return self.finish(&mut session, turn);
                }
            }
            node = transition(node, &turn);
        }
    }

    /// Assemble the response and, when the turn did not degrade, commit the
    /// session: preference fold-in, history update, feedback memo.
    fn finish(
        &self,
        session: &mut stylist_core::models::SessionState,
        turn: TurnState,
    ) -> TurnOutput {
        if let Some(note) = &turn.degraded {
            return TurnOutput {
                response_text: response::degraded_message(),
                recommendations: RecommendationResult::default(),
                report: turn.report.clone(),
                error: Some(note.clone()),
            };
        }

        let intent_kind = turn.intent.as_ref().map(|i| i.kind);
        let recommendations = turn.result.clone().unwrap_or_default();

        let response_text = match intent_kind {
            Some(IntentKind::General) => response::general_message(),
            Some(IntentKind::InformationRequest) => response::information_message(),
            Some(IntentKind::Feedback) if turn.result.is_none() => {
                response::feedback_ack(turn.feedback)
            }
            _ => response::recommendation_text(&turn, &recommendations),
        };

        if let Some(intent) = &turn.intent {
            session.preferences.observe_constraints(&intent.constraints);
        }
        if recommendations.is_empty() {
            session.touch();
        } else {
            session.record_result(recommendations.ids().map(str::to_string).collect());
        }
        if turn.feedback.is_some() {
            session.last_feedback = turn.feedback;
        }
        info!(
            session_id = %turn.session_id,
            items = recommendations.len(),
            adjustments = turn.adjustment_count,
            bound = turn.bound_reached,
            "turn finished"
        );

        TurnOutput {
            response_text,
            recommendations,
            report: turn.report,
            error: None,
        }
    }

    /// Fire-and-forget positive feedback on the last shown items.
    fn record_positive(&self, session: &stylist_core::models::SessionState, turn: &TurnState) {
        for candidate_id in &session.last_result_ids {
            if let Err(e) =
                self.sink
                    .record(&turn.session_id, candidate_id, "positive_feedback", 1.0)
            {
                warn!(candidate_id, error = %e, "feedback sink rejected record");
            }
        }
    }
}
