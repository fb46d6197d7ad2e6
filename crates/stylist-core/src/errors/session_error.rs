/// Session-store and feedback-sink errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {session_id}")]
    NotFound { session_id: String },

    #[error("feedback sink rejected record for candidate {candidate_id}: {reason}")]
    SinkRejected {
        candidate_id: String,
        reason: String,
    },
}
