use crate::errors::SessionError;

/// Fire-and-forget feedback/preference sink.
///
/// Failures are logged by the caller, never propagated.
pub trait IFeedbackSink: Send + Sync {
    fn record(
        &self,
        session_id: &str,
        candidate_id: &str,
        reason: &str,
        confidence: f64,
    ) -> Result<(), SessionError>;
}
