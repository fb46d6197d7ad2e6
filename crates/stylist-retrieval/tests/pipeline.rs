//! Stage progression over the in-memory store and index.

use std::collections::HashSet;

use stylist_core::config::RetrievalConfig;
use stylist_core::models::{
    Constraint, ConstraintSet, PreferenceProfile, PriceBand, RetrievalRequest,
};
use stylist_retrieval::{RetrievalPipeline, Strategy};
use test_fixtures::{sample_catalog, FailingIndex, FailingStore, InMemoryIndex, InMemoryStore};

fn request(query: &str, constraints: Vec<Constraint>) -> RetrievalRequest {
    RetrievalRequest {
        query_text: query.into(),
        constraints: constraints.into_iter().collect(),
        preferences: PreferenceProfile::new(),
        requested_count: 5,
        exclusions: HashSet::new(),
        confidence_floor: 0.0,
    }
}

#[test]
fn specific_stage_satisfies_without_relaxation() {
    let store = InMemoryStore::new(sample_catalog());
    let index = InMemoryIndex::new(sample_catalog());
    let config = RetrievalConfig::default();
    let pipeline = RetrievalPipeline::new(&store, &index, &config);

    // All five tops match the category filter, so stage 1 fills the count.
    let outcome = pipeline
        .run(&request("상의 추천해줘", vec![Constraint::Category("상의".into())]))
        .unwrap();

    assert_eq!(outcome.candidates.len(), 5);
    assert_eq!(outcome.stage_reports.len(), 1);
    assert_eq!(outcome.stage_reports[0].stage, 1);
    assert_eq!(outcome.stage_reports[0].strategy, Strategy::Structured);
    assert!(outcome.candidates.iter().all(|c| c.category == "상의"));
}

#[test]
fn narrow_filters_relax_stage_by_stage() {
    let store = InMemoryStore::new(sample_catalog());
    let index = InMemoryIndex::new(sample_catalog());
    let config = RetrievalConfig::default();
    let pipeline = RetrievalPipeline::new(&store, &index, &config);

    // Category + style + budget band matches almost nothing at full
    // specificity; the relaxation stages must widen the pool.
    let outcome = pipeline
        .run(&request(
            "아우터",
            vec![
                Constraint::Category("아우터".into()),
                Constraint::Style("포멀".into()),
                Constraint::PriceBand(PriceBand::Budget),
            ],
        ))
        .unwrap();

    assert!(outcome.candidates.len() >= 3, "relaxation should widen the pool");
    assert!(outcome.deepest_contributing_stage().unwrap_or(0) > 2);
    // First occurrence wins: the earliest stages' candidates lead.
    let first_categories: Vec<&str> = outcome
        .candidates
        .iter()
        .take(3)
        .map(|c| c.category.as_str())
        .collect();
    assert!(first_categories.contains(&"아우터"));
}

#[test]
fn popularity_fallback_fires_for_unmatchable_filters() {
    let store = InMemoryStore::new(sample_catalog());
    let index = InMemoryIndex::new(sample_catalog());
    let config = RetrievalConfig::default();
    let pipeline = RetrievalPipeline::new(&store, &index, &config);

    let outcome = pipeline
        .run(&request("없는 카테고리", vec![Constraint::Category("모자".into())]))
        .unwrap();

    let last = outcome.stage_reports.last().unwrap();
    assert_eq!(last.stage, 7);
    assert!(!outcome.candidates.is_empty());
    assert!(outcome
        .candidates
        .iter()
        .all(|c| c.rating_avg >= 4.0 && c.review_count >= 100));
}

#[test]
fn exclusions_survive_every_stage() {
    let store = InMemoryStore::new(sample_catalog());
    let index = InMemoryIndex::new(sample_catalog());
    let config = RetrievalConfig::default();
    let pipeline = RetrievalPipeline::new(&store, &index, &config);

    let mut req = request("상의", vec![Constraint::Category("상의".into())]);
    req.exclusions.insert("top-001".into());
    req.exclusions.insert("top-002".into());

    let outcome = pipeline.run(&req).unwrap();
    assert!(outcome.candidates.iter().all(|c| c.id != "top-001" && c.id != "top-002"));
}

#[test]
fn rerun_is_deterministic() {
    let store = InMemoryStore::new(sample_catalog());
    let index = InMemoryIndex::new(sample_catalog());
    let config = RetrievalConfig::default();
    let pipeline = RetrievalPipeline::new(&store, &index, &config);

    let req = request("캐주얼", vec![Constraint::Style("캐주얼".into())]);
    let first: Vec<String> = pipeline
        .run(&req)
        .unwrap()
        .candidates
        .into_iter()
        .map(|c| c.id)
        .collect();
    let second: Vec<String> = pipeline
        .run(&req)
        .unwrap()
        .candidates
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(first, second);
}

mod dedup_properties {
    use proptest::prelude::*;
    use stylist_core::models::Candidate;
    use stylist_retrieval::dedup::dedup_by_id;

    fn arb_candidate() -> impl Strategy<Value = Candidate> {
        "[a-c]{1,2}".prop_map(|id| Candidate {
            name: format!("상품 {id}"),
            id,
            category: "상의".into(),
            brand: None,
            price: None,
            rating_avg: 4.0,
            review_count: 10,
            size_count: 1,
            tags: Vec::new(),
            relevance: 0.0,
        })
    }

    proptest! {
        #[test]
        fn dedup_is_idempotent(batch in proptest::collection::vec(arb_candidate(), 0..30)) {
            let once = dedup_by_id(batch);
            let twice = dedup_by_id(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}

#[test]
fn collaborator_failure_propagates() {
    let store = FailingStore;
    let index = FailingIndex;
    let config = RetrievalConfig::default();
    let pipeline = RetrievalPipeline::new(&store, &index, &config);

    let err = pipeline
        .run(&request("상의", vec![Constraint::Category("상의".into())]))
        .unwrap_err();
    assert!(err.to_string().contains("unreachable"));
}
