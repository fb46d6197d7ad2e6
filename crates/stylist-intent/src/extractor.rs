//! Intent & slot extractor.
//!
//! Service-backed classification with a deterministic rule-based fallback.
//! The fallback chain never propagates a service error to the caller: the
//! worst case is rule-based extraction with fixed per-class confidences.

use serde::Deserialize;
use tracing::{debug, warn};

use stylist_core::errors::ExtractionError;
use stylist_core::models::{
    Constraint, FeedbackSignal, IntentKind, IntentResult, PriceBand, SessionState, Utterance,
};
use stylist_core::traits::IGenerativeModel;

use crate::feedback::FeedbackDetector;
use crate::slots;
use crate::vocabulary;

/// Fixed rule-path confidence per intent class.
const CONF_RECOMMENDATION: f64 = 0.8;
const CONF_FEEDBACK: f64 = 0.7;
const CONF_INFORMATION: f64 = 0.6;
const CONF_GENERAL: f64 = 0.5;

/// Typed shape of the service's JSON classification response.
#[derive(Debug, Deserialize)]
struct ServiceResponse {
    intent: String,
    confidence: f64,
    requires_recommendation: bool,
    #[serde(default)]
    extracted_info: ServiceSlots,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceSlots {
    category: Option<String>,
    style: Option<String>,
    color: Option<String>,
    price_range: Option<String>,
    feedback_type: Option<String>,
}

/// The extractor. Pure function of input + static vocabulary; the optional
/// model only changes the classification path, never the contract.
pub struct IntentExtractor {
    model: Option<Box<dyn IGenerativeModel>>,
}

impl IntentExtractor {
    /// Rule-based only.
    pub fn new() -> Self {
        Self { model: None }
    }

    /// Service-backed, with rule-based fallback.
    pub fn with_model(model: Box<dyn IGenerativeModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Extract intent and constraints from one utterance.
    ///
    /// Never blocks beyond the backing call's own latency and never errors:
    /// any service failure degrades to the rule path.
    pub fn extract(&self, utterance: &Utterance, session: Option<&SessionState>) -> IntentResult {
        if let Some(model) = self.model.as_deref() {
            if model.is_available() {
                match self.extract_via_service(model, utterance) {
                    Ok(result) => return self.contextualize(result, utterance, session),
                    Err(e) => {
                        warn!(error = %e, "language service failed, using rule-based extraction");
                    }
                }
            }
        }
        self.contextualize(self.extract_rule_based(utterance), utterance, session)
    }

    /// Feedback only makes sense after a recommendation has been shown:
    /// without one a feedback classification becomes a fresh request, and
    /// with one any utterance the feedback detector recognizes is routed as
    /// feedback even when the keyword tables read it differently.
    fn contextualize(
        &self,
        result: IntentResult,
        utterance: &Utterance,
        session: Option<&SessionState>,
    ) -> IntentResult {
        let has_prior = session.is_some_and(|s| s.has_prior_result());
        if result.kind == IntentKind::Feedback && !has_prior {
            return IntentResult::new(
                IntentKind::RecommendationRequest,
                result.confidence.value(),
                result.constraints,
                true,
            );
        }
        if has_prior
            && result.kind != IntentKind::Feedback
            && FeedbackDetector::classify(&utterance.text).is_some()
        {
            return IntentResult::new(
                IntentKind::Feedback,
                result.confidence.value().max(CONF_FEEDBACK),
                result.constraints,
                true,
            );
        }
        result
    }

    fn extract_via_service(
        &self,
        model: &dyn IGenerativeModel,
        utterance: &Utterance,
    ) -> Result<IntentResult, ExtractionError> {
        let prompt = build_prompt(&utterance.text);
        let raw = model.generate(&prompt)?;

        let parsed: ServiceResponse =
            serde_json::from_str(raw.trim()).map_err(|e| ExtractionError::MalformedResponse {
                reason: e.to_string(),
            })?;

        let kind = match parsed.intent.as_str() {
            "recommendation_request" => IntentKind::RecommendationRequest,
            "feedback" => IntentKind::Feedback,
            "information_request" => IntentKind::InformationRequest,
            "general_conversation" | "general" => IntentKind::General,
            other => {
                return Err(ExtractionError::MalformedResponse {
                    reason: format!("unknown intent class: {other}"),
                })
            }
        };

        // Service slots are merged with the rule-based extraction so a
        // terse service response cannot lose locally-recognizable slots.
        let mut constraints = slots::extract_constraints(&utterance.text);
        merge_service_slots(&mut constraints, &parsed.extracted_info);

        debug!(?kind, confidence = parsed.confidence, "service classification");
        Ok(IntentResult::new(
            kind,
            parsed.confidence,
            constraints,
            parsed.requires_recommendation,
        ))
    }

    fn extract_rule_based(&self, utterance: &Utterance) -> IntentResult {
        let text = utterance.text.as_str();
        let constraints = slots::extract_constraints(text);

        let (kind, confidence, requires_retrieval) =
            if vocabulary::contains_any(text, vocabulary::RECOMMENDATION_KEYWORDS) {
                (IntentKind::RecommendationRequest, CONF_RECOMMENDATION, true)
            } else if vocabulary::contains_any(text, vocabulary::FEEDBACK_KEYWORDS) {
                (IntentKind::Feedback, CONF_FEEDBACK, true)
            } else if vocabulary::contains_any(text, vocabulary::INFORMATION_KEYWORDS) {
                (IntentKind::InformationRequest, CONF_INFORMATION, false)
            } else {
                (IntentKind::General, CONF_GENERAL, false)
            };

        debug!(?kind, slots = constraints.len(), "rule-based classification");
        IntentResult::new(kind, confidence, constraints, requires_retrieval)
    }
}

impl Default for IntentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "다음 사용자 입력의 의도를 분석해주세요.\n\
         사용자 입력: \"{text}\"\n\
         다음 JSON 형식으로만 응답해주세요:\n\
         {{\"intent\": \"recommendation_request|feedback|information_request|general_conversation\",\n\
         \"confidence\": 0.0,\n\
         \"requires_recommendation\": false,\n\
         \"extracted_info\": {{\"category\": null, \"style\": null, \"color\": null,\n\
         \"price_range\": null, \"feedback_type\": null}}}}"
    )
}

fn merge_service_slots(constraints: &mut stylist_core::models::ConstraintSet, slots: &ServiceSlots) {
    if let Some(v) = &slots.category {
        constraints.insert(Constraint::Category(v.clone()));
    }
    if let Some(v) = &slots.style {
        constraints.insert(Constraint::Style(v.clone()));
    }
    if let Some(v) = &slots.color {
        constraints.insert(Constraint::Color(v.clone()));
    }
    if let Some(v) = &slots.price_range {
        let band = match v.as_str() {
            "저렴" => Some(PriceBand::Budget),
            "보통" => Some(PriceBand::Mid),
            "고급" => Some(PriceBand::Premium),
            _ => None,
        };
        if let Some(band) = band {
            constraints.insert(Constraint::PriceBand(band));
        }
    }
    if let Some(v) = &slots.feedback_type {
        let signal = match v.as_str() {
            "cheaper" => Some(FeedbackSignal::Cheaper),
            "different_style" => Some(FeedbackSignal::DifferentStyle),
            "better_quality" => Some(FeedbackSignal::BetterQuality),
            "more_trendy" => Some(FeedbackSignal::MoreTrendy),
            _ => None,
        };
        if let Some(signal) = signal {
            constraints.insert(Constraint::Feedback(signal));
        }
    }
}
