//! Collaborator interfaces.
//!
//! Everything outside the recommendation core — the language-generation
//! service, the relational store, the similarity index, the feedback sink,
//! the session store — is consumed through one of these traits. All calls
//! are blocking; implementations own their per-call timeout and surface it
//! as the corresponding error variant.

mod feedback;
mod generation;
mod session;
mod similarity;
mod store;

pub use feedback::IFeedbackSink;
pub use generation::IGenerativeModel;
pub use session::ISessionStore;
pub use similarity::ISimilarityIndex;
pub use store::ICandidateStore;
