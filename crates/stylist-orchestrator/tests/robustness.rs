//! The orchestrator must absorb arbitrary input without panicking.

use std::sync::Arc;

use proptest::prelude::*;

use stylist_core::config::StylistConfig;
use stylist_orchestrator::Orchestrator;
use test_fixtures::{sample_catalog, InMemoryIndex, InMemoryStore, RecordingSink};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_utterance_yields_a_response(text in "\\PC{0,40}") {
        let orchestrator = Orchestrator::new(
            StylistConfig::default(),
            Arc::new(InMemoryStore::new(sample_catalog())),
            Arc::new(InMemoryIndex::new(sample_catalog())),
            Arc::new(RecordingSink::new()),
        );
        let out = orchestrator.process_turn("fuzz", &text);
        prop_assert!(!out.response_text.is_empty());
        prop_assert!(out.error.is_none());
    }
}
