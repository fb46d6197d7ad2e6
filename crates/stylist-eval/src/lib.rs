//! # stylist-eval
//!
//! Quality evaluation of a ranked recommendation set along four axes:
//! relevance, diversity, novelty, and coverage. Pure computation over the
//! result and its context; the orchestrator routes on the report.

pub mod evaluator;
pub mod metrics;

pub use evaluator::{EvalWeights, EvaluationContext, Evaluator};
