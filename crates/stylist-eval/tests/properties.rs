//! Report invariants over generated result sets.

use proptest::prelude::*;

use stylist_core::models::{Candidate, RecommendationResult, ScoreBreakdown, ScoredCandidate};
use stylist_eval::{EvalWeights, EvaluationContext, Evaluator};

fn arb_scored() -> impl Strategy<Value = ScoredCandidate> {
    (
        "[a-z]{3,8}",
        prop_oneof![Just("상의"), Just("하의"), Just("아우터")],
        0.0f64..=5.0,
        0u64..3_000,
        proptest::option::of(1_000u32..200_000),
        0.0f64..=1.0,
    )
        .prop_map(|(id, category, rating_avg, review_count, price, confidence)| {
            ScoredCandidate {
                candidate: Candidate {
                    name: format!("{category} {id}"),
                    id,
                    category: category.into(),
                    brand: None,
                    price,
                    rating_avg,
                    review_count,
                    size_count: 3,
                    tags: vec!["베이직".into()],
                    relevance: 0.0,
                },
                confidence,
                components: ScoreBreakdown::default(),
            }
        })
}

proptest! {
    #[test]
    fn every_axis_and_overall_stay_in_unit_interval(
        items in proptest::collection::vec(arb_scored(), 0..10),
    ) {
        let result = RecommendationResult { items, requested_count: 5 };
        let ctx = EvaluationContext {
            query: "베이직 상의".into(),
            requested_count: 5,
            ..EvaluationContext::default()
        };
        let report = Evaluator::default().evaluate(&result, &ctx);

        for axis in [report.relevance, report.diversity, report.novelty, report.coverage] {
            prop_assert!((0.0..=1.0).contains(&axis), "axis out of range: {axis}");
        }
        prop_assert!((0.0..=1.0).contains(&report.overall));
        prop_assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn evaluation_is_deterministic(items in proptest::collection::vec(arb_scored(), 0..10)) {
        let result = RecommendationResult { items, requested_count: 5 };
        let ctx = EvaluationContext {
            query: "상의".into(),
            requested_count: 5,
            ..EvaluationContext::default()
        };
        let evaluator = Evaluator::default();
        prop_assert_eq!(evaluator.evaluate(&result, &ctx), evaluator.evaluate(&result, &ctx));
    }
}

#[test]
fn weights_sum_to_one() {
    assert!((EvalWeights::default().sum() - 1.0).abs() < 1e-6);
}
