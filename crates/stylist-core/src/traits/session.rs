use std::sync::{Arc, Mutex};

use crate::models::SessionState;

/// Session store with lock-per-key semantics.
///
/// `checkout` hands back the session's own mutex; holding its guard for the
/// duration of a turn is what serializes interleaved turns from the same
/// session (preference mutation is not commutative across turns).
pub trait ISessionStore: Send + Sync {
    /// Get the session entry, creating it on first use.
    fn checkout(&self, session_id: &str) -> Arc<Mutex<SessionState>>;

    /// Remove a session, returning whether it existed.
    fn remove(&self, session_id: &str) -> bool;

    /// Number of live sessions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
