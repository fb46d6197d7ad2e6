//! Scoring invariants checked over generated candidates.

use proptest::prelude::*;

use stylist_core::models::{Candidate, PreferenceProfile};
use stylist_ranking::{rank, Scorer, ScorerWeights};

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (
        "[a-z]{3,8}",
        0.0f64..=5.0,
        0u64..5_000,
        0u32..20,
        proptest::option::of(0u32..300_000),
    )
        .prop_map(|(id, rating_avg, review_count, size_count, price)| Candidate {
            name: format!("상품 {id}"),
            id,
            category: "상의".into(),
            brand: None,
            price,
            rating_avg,
            review_count,
            size_count,
            tags: vec!["베이직".into()],
            relevance: 0.0,
        })
}

proptest! {
    #[test]
    fn confidence_is_always_in_unit_interval(candidate in arb_candidate()) {
        let scored = Scorer::new().score(&candidate, &PreferenceProfile::new(), "베이직 상의");
        prop_assert!((0.0..=1.0).contains(&scored.confidence));
    }

    #[test]
    fn raising_review_count_never_lowers_confidence(
        candidate in arb_candidate(),
        extra in 1u64..5_000,
    ) {
        let scorer = Scorer::new();
        let prefs = PreferenceProfile::new();
        let base = scorer.score(&candidate, &prefs, "상의").confidence;
        let mut better = candidate;
        better.review_count += extra;
        let bumped = scorer.score(&better, &prefs, "상의").confidence;
        prop_assert!(bumped >= base - 1e-12);
    }

    #[test]
    fn raising_rating_never_lowers_confidence(candidate in arb_candidate()) {
        let scorer = Scorer::new();
        let prefs = PreferenceProfile::new();
        let base = scorer.score(&candidate, &prefs, "상의").confidence;
        let mut better = candidate;
        better.rating_avg = 5.0;
        let bumped = scorer.score(&better, &prefs, "상의").confidence;
        prop_assert!(bumped >= base - 1e-12);
    }

    #[test]
    fn ranking_is_deterministic_and_ordered(
        candidates in proptest::collection::vec(arb_candidate(), 0..20),
    ) {
        let scorer = Scorer::new();
        let prefs = PreferenceProfile::new();
        let first = rank(&scorer, &candidates, &prefs, "베이직", 5, 0.0);
        let second = rank(&scorer, &candidates, &prefs, "베이직", 5, 0.0);

        let a: Vec<&str> = first.ids().collect();
        let b: Vec<&str> = second.ids().collect();
        prop_assert_eq!(a, b);

        for pair in first.items.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
        prop_assert!(first.len() <= 5);
    }
}

#[test]
fn weights_sum_to_one() {
    assert!((ScorerWeights::default().sum() - 1.0).abs() < 1e-6);
}
