//! Error types for the stylist system, one enum per subsystem.

mod extraction_error;
mod retrieval_error;
mod session_error;

pub use extraction_error::ExtractionError;
pub use retrieval_error::RetrievalError;
pub use session_error::SessionError;

/// Top-level error type. Subsystem errors fold into this via `From`.
#[derive(Debug, thiserror::Error)]
pub enum StylistError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used across the workspace.
pub type StylistResult<T> = Result<T, StylistError>;
