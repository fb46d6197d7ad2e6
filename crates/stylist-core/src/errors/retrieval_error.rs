/// Retrieval subsystem errors.
///
/// Any of these surfaces to the user as a degraded response; the pipeline's
/// built-in relaxation stages are the only retry mechanism.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("candidate store unreachable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("similarity index unreachable: {reason}")]
    IndexUnavailable { reason: String },

    #[error("collaborator call timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}
