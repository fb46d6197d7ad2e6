//! # stylist-intent
//!
//! Turns raw user text into a typed intent plus extracted constraints.
//!
//! Two paths: a service-backed path through an [`IGenerativeModel`]
//! collaborator, and a deterministic rule-based path over a closed Korean
//! vocabulary. Any service error falls back to the rules — extraction never
//! fails.
//!
//! [`IGenerativeModel`]: stylist_core::traits::IGenerativeModel

pub mod extractor;
pub mod feedback;
pub mod slots;
pub mod vocabulary;

pub use extractor::IntentExtractor;
pub use feedback::FeedbackDetector;
