use serde::{Deserialize, Serialize};

use super::defaults;

/// Quality-evaluator thresholds.
///
/// These are heuristic defaults carried over from the source system, not
/// derived from a documented ground truth; they are configuration, not
/// guaranteed-correct business rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Overall score at or above which quality is "excellent".
    pub quality_excellent: f64,
    /// Overall score at or above which quality is "good".
    pub quality_good: f64,
    /// Sub-score thresholds below which a suggestion fires.
    pub suggest_relevance_below: f64,
    pub suggest_diversity_below: f64,
    pub suggest_novelty_below: f64,
    pub suggest_coverage_below: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            quality_excellent: defaults::DEFAULT_QUALITY_EXCELLENT,
            quality_good: defaults::DEFAULT_QUALITY_GOOD,
            suggest_relevance_below: defaults::DEFAULT_SUGGEST_RELEVANCE_BELOW,
            suggest_diversity_below: defaults::DEFAULT_SUGGEST_DIVERSITY_BELOW,
            suggest_novelty_below: defaults::DEFAULT_SUGGEST_NOVELTY_BELOW,
            suggest_coverage_below: defaults::DEFAULT_SUGGEST_COVERAGE_BELOW,
        }
    }
}
