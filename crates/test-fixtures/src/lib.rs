//! Shared test doubles and sample data for integration scenarios.
//!
//! A small Korean fashion catalog plus in-memory implementations of every
//! collaborator trait, including failing variants for degraded-path tests.

pub mod catalog;
pub mod mocks;

pub use catalog::{sample_catalog, sample_candidate};
pub use mocks::{
    predicate_matches, FailingIndex, FailingModel, FailingStore, InMemoryIndex, InMemoryStore,
    RecordedFeedback, RecordingSink, ScriptedModel,
};
