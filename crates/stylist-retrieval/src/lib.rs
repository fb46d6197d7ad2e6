//! # stylist-retrieval
//!
//! Candidate retrieval for the recommendation pipeline: a strategy selector
//! that routes a turn to structured, similarity, or hybrid search, and a
//! seven-stage pipeline that progressively relaxes constraints until enough
//! unique candidates have accumulated.

pub mod dedup;
pub mod pipeline;
pub mod predicate;
pub mod strategy;

pub use pipeline::{PipelineOutcome, RetrievalPipeline, StageReport};
pub use strategy::{select_strategy, Strategy};
