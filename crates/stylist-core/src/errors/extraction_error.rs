/// Intent-extraction subsystem errors.
///
/// These never reach the orchestrator: the extractor recovers from every
/// variant by falling back to the rule-based path. They exist so the
/// fallback decision is typed rather than a swallowed panic.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("language service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error("language service timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("malformed service response: {reason}")]
    MalformedResponse { reason: String },
}
