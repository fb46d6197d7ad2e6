//! # stylist-orchestrator
//!
//! Drives one user turn through the recommendation state machine:
//! intent analysis, staged retrieval, scoring, evaluation, a bounded
//! adjustment loop, feedback routing, and response assembly. Collaborator
//! failures degrade to an apologetic response; they never escape a turn.

pub mod adjust;
pub mod graph;
pub mod orchestrator;
pub mod response;

pub use adjust::RetrievalPlan;
pub use graph::{transition, Node};
pub use orchestrator::Orchestrator;
