//! Report assembly: weighted overall score, quality bucket, suggestions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use stylist_core::config::EvaluationConfig;
use stylist_core::models::{
    ConstraintSet, EvaluationReport, PreferenceProfile, QualityLevel, RecommendationResult,
    Suggestion,
};

use crate::metrics;

/// Weights over the four axes. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub relevance: f64,
    pub diversity: f64,
    pub novelty: f64,
    pub coverage: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            relevance: 0.40,
            diversity: 0.25,
            novelty: 0.20,
            coverage: 0.15,
        }
    }
}

impl EvalWeights {
    pub fn sum(&self) -> f64 {
        self.relevance + self.diversity + self.novelty + self.coverage
    }
}

/// What the result is judged against: the turn that produced it and the
/// session history behind it.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    pub query: String,
    pub constraints: ConstraintSet,
    pub preferences: PreferenceProfile,
    pub requested_count: usize,
    pub seen_ids: HashSet<String>,
}

pub struct Evaluator {
    weights: EvalWeights,
    config: EvaluationConfig,
}

impl Evaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            weights: EvalWeights::default(),
            config,
        }
    }

    pub fn with_weights(config: EvaluationConfig, weights: EvalWeights) -> Self {
        Self { weights, config }
    }

    pub fn evaluate(
        &self,
        result: &RecommendationResult,
        ctx: &EvaluationContext,
    ) -> EvaluationReport {
        if result.is_empty() {
            return EvaluationReport {
                relevance: 0.0,
                diversity: 0.0,
                novelty: 0.0,
                coverage: 0.0,
                overall: 0.0,
                quality: QualityLevel::NeedsImprovement,
                suggestions: vec![Suggestion::NoResults],
            };
        }

        let relevance = metrics::relevance(result, ctx);
        let diversity = metrics::diversity(result);
        let novelty = metrics::novelty(result, &ctx.seen_ids);
        let coverage = metrics::coverage(result, ctx);

        let w = &self.weights;
        let overall = w.relevance * relevance
            + w.diversity * diversity
            + w.novelty * novelty
            + w.coverage * coverage;

        let quality = if overall >= self.config.quality_excellent {
            QualityLevel::Excellent
        } else if overall >= self.config.quality_good {
            QualityLevel::Good
        } else {
            QualityLevel::NeedsImprovement
        };

        let mut suggestions = Vec::new();
        if relevance < self.config.suggest_relevance_below {
            suggestions.push(Suggestion::ImproveRelevance);
        }
        if diversity < self.config.suggest_diversity_below {
            suggestions.push(Suggestion::BroadenDiversity);
        }
        if novelty < self.config.suggest_novelty_below {
            suggestions.push(Suggestion::IncreaseNovelty);
        }
        if coverage < self.config.suggest_coverage_below {
            suggestions.push(Suggestion::ExpandCoverage);
        }
        if suggestions.is_empty() {
            suggestions.push(Suggestion::Adequate);
        }

        debug!(relevance, diversity, novelty, coverage, overall, ?quality, "evaluation");
        EvaluationReport {
            relevance,
            diversity,
            novelty,
            coverage,
            overall,
            quality,
            suggestions,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::models::{Candidate, ScoreBreakdown, ScoredCandidate};

    fn scored(id: &str, category: &str, tags: &[&str], price: u32, confidence: f64) -> ScoredCandidate {
        ScoredCandidate {
            candidate: Candidate {
                id: id.into(),
                name: format!("{category} {id}"),
                category: category.into(),
                brand: None,
                price: Some(price),
                rating_avg: 4.5,
                review_count: 300,
                size_count: 4,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                relevance: 0.0,
            },
            confidence,
            components: ScoreBreakdown::default(),
        }
    }

    fn result(items: Vec<ScoredCandidate>) -> RecommendationResult {
        RecommendationResult { items, requested_count: 5 }
    }

    #[test]
    fn default_weights_sum_to_one() {
        assert!((EvalWeights::default().sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn empty_result_short_circuits() {
        let report = Evaluator::default().evaluate(&result(vec![]), &EvaluationContext::default());
        assert_eq!(report.overall, 0.0);
        assert_eq!(report.quality, QualityLevel::NeedsImprovement);
        assert_eq!(report.suggestions, vec![Suggestion::NoResults]);
    }

    #[test]
    fn no_history_fixes_novelty() {
        let report = Evaluator::default().evaluate(
            &result(vec![scored("a", "상의", &["베이직"], 20_000, 0.8)]),
            &EvaluationContext::default(),
        );
        assert!((report.novelty - 0.7).abs() < 1e-9);
        // Single item pins diversity to the midpoint.
        assert!((report.diversity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn all_seen_items_score_zero_novelty() {
        let ctx = EvaluationContext {
            seen_ids: ["a".to_string(), "b".to_string()].into_iter().collect(),
            ..EvaluationContext::default()
        };
        let report = Evaluator::default().evaluate(
            &result(vec![
                scored("a", "상의", &[], 10_000, 0.8),
                scored("b", "하의", &[], 20_000, 0.8),
            ]),
            &ctx,
        );
        assert_eq!(report.novelty, 0.0);
        assert!(report.suggestions.contains(&Suggestion::IncreaseNovelty));
    }

    #[test]
    fn adequate_when_no_threshold_fires() {
        let ctx = EvaluationContext {
            query: "상의".into(),
            requested_count: 2,
            ..EvaluationContext::default()
        };
        let report = Evaluator::default().evaluate(
            &result(vec![
                scored("a", "상의", &["베이직"], 10_000, 0.9),
                scored("b", "아우터", &["캐주얼"], 60_000, 0.85),
            ]),
            &ctx,
        );
        assert_eq!(report.suggestions, vec![Suggestion::Adequate]);
    }
}
