//! Adjustment planning: what to change before re-entering retrieval.
//!
//! One [`RetrievalPlan`] lives for the whole turn; adjustment passes and
//! feedback folding mutate it in place. The plan never touches the session,
//! so a turn that later degrades leaves no trace.

use std::collections::HashSet;

use tracing::debug;

use stylist_core::models::{
    Constraint, ConstraintSet, FeedbackKind, FeedbackSignal, PreferenceProfile, PriceBand,
    RetrievalRequest, Suggestion,
};

/// Confidence-floor increment applied per relevance adjustment.
const FLOOR_STEP: f64 = 0.1;

/// Floor applied when feedback asks for better quality.
const QUALITY_FLOOR: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct RetrievalPlan {
    pub query_text: String,
    pub constraints: ConstraintSet,
    pub exclusions: HashSet<String>,
    pub confidence_floor: f64,
}

impl RetrievalPlan {
    pub fn new(query_text: String, constraints: ConstraintSet) -> Self {
        Self {
            query_text,
            constraints,
            exclusions: HashSet::new(),
            confidence_floor: 0.0,
        }
    }

    pub fn to_request(
        &self,
        preferences: PreferenceProfile,
        requested_count: usize,
    ) -> RetrievalRequest {
        RetrievalRequest {
            query_text: self.query_text.clone(),
            constraints: self.constraints.clone(),
            preferences,
            requested_count,
            exclusions: self.exclusions.clone(),
            confidence_floor: self.confidence_floor,
        }
    }

    /// Relax the plan according to the evaluator's suggestions.
    pub fn apply_suggestions(&mut self, suggestions: &[Suggestion], seen_ids: &HashSet<String>) {
        for suggestion in suggestions {
            match suggestion {
                Suggestion::ImproveRelevance => {
                    self.confidence_floor = (self.confidence_floor + FLOOR_STEP).min(1.0);
                }
                Suggestion::BroadenDiversity => {
                    self.constraints = self.constraints.without_style();
                }
                Suggestion::IncreaseNovelty => {
                    self.exclusions.extend(seen_ids.iter().cloned());
                }
                Suggestion::ExpandCoverage => {
                    // Widen the candidate pool: price first, brand second.
                    if self.constraints.price_band().is_some() {
                        self.constraints = self.constraints.without_price();
                    } else {
                        self.constraints = self.constraints.without_brand();
                    }
                }
                Suggestion::NoResults => {
                    self.constraints = self.constraints.category_only();
                    self.confidence_floor = 0.0;
                }
                Suggestion::Adequate => {}
            }
        }
        debug!(
            floor = self.confidence_floor,
            remaining = self.constraints.len(),
            "plan after suggestion pass"
        );
    }

    /// Fold a classified feedback turn into the plan.
    pub fn apply_feedback(
        &mut self,
        kind: FeedbackKind,
        signal: Option<FeedbackSignal>,
        last_result_ids: &[String],
    ) {
        match kind {
            FeedbackKind::ConditionChange => {
                self.exclusions.extend(last_result_ids.iter().cloned());
                match signal {
                    Some(FeedbackSignal::Cheaper) => {
                        self.constraints.set_price_band(PriceBand::Budget);
                    }
                    Some(FeedbackSignal::DifferentStyle) => {
                        self.constraints = self.constraints.without_style();
                    }
                    Some(FeedbackSignal::BetterQuality) => {
                        self.confidence_floor = self.confidence_floor.max(QUALITY_FLOOR);
                    }
                    Some(FeedbackSignal::MoreTrendy) => {
                        self.constraints.insert(Constraint::Style("트렌디".into()));
                    }
                    None => {}
                }
            }
            FeedbackKind::Negative => {
                self.exclusions.extend(last_result_ids.iter().cloned());
                self.constraints = self.constraints.without_style();
            }
            FeedbackKind::MoreItems => {
                self.exclusions.extend(last_result_ids.iter().cloned());
            }
            FeedbackKind::Positive | FeedbackKind::Behavior => {}
        }
        debug!(?kind, excluded = self.exclusions.len(), "plan after feedback fold");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_with(constraints: Vec<Constraint>) -> RetrievalPlan {
        RetrievalPlan::new("테스트".into(), constraints.into_iter().collect())
    }

    #[test]
    fn cheaper_feedback_forces_budget_band() {
        let mut plan = plan_with(vec![Constraint::PriceBand(PriceBand::Premium)]);
        plan.apply_feedback(
            FeedbackKind::ConditionChange,
            Some(FeedbackSignal::Cheaper),
            &["p1".into()],
        );
        assert_eq!(plan.constraints.price_band(), Some(PriceBand::Budget));
        assert!(plan.exclusions.contains("p1"));
    }

    #[test]
    fn more_items_only_excludes() {
        let mut plan = plan_with(vec![Constraint::Category("상의".into())]);
        plan.apply_feedback(FeedbackKind::MoreItems, None, &["p1".into(), "p2".into()]);
        assert_eq!(plan.exclusions.len(), 2);
        assert_eq!(plan.constraints.category(), Some("상의"));
    }

    #[test]
    fn coverage_suggestion_drops_price_before_brand() {
        let mut plan = plan_with(vec![
            Constraint::PriceBand(PriceBand::Mid),
            Constraint::Brand("나이키".into()),
        ]);
        plan.apply_suggestions(&[Suggestion::ExpandCoverage], &HashSet::new());
        assert!(plan.constraints.price_band().is_none());
        assert_eq!(plan.constraints.brand(), Some("나이키"));
        plan.apply_suggestions(&[Suggestion::ExpandCoverage], &HashSet::new());
        assert!(plan.constraints.brand().is_none());
    }

    #[test]
    fn no_results_resets_to_category() {
        let mut plan = plan_with(vec![
            Constraint::Category("상의".into()),
            Constraint::Style("베이직".into()),
            Constraint::PriceBand(PriceBand::Budget),
        ]);
        plan.confidence_floor = 0.3;
        plan.apply_suggestions(&[Suggestion::NoResults], &HashSet::new());
        assert_eq!(plan.constraints.len(), 1);
        assert_eq!(plan.constraints.category(), Some("상의"));
        assert_eq!(plan.confidence_floor, 0.0);
    }

    #[test]
    fn relevance_suggestion_raises_floor() {
        let mut plan = plan_with(vec![]);
        plan.apply_suggestions(&[Suggestion::ImproveRelevance], &HashSet::new());
        assert!((plan.confidence_floor - 0.1).abs() < 1e-9);
    }
}
