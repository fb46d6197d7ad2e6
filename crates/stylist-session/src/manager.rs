use std::sync::{Arc, Mutex};

use chrono::Duration;
use dashmap::DashMap;
use tracing::{debug, info};

use stylist_core::config::SessionConfig;
use stylist_core::models::SessionState;
use stylist_core::traits::ISessionStore;

/// Sharded map of live sessions. `checkout` hands out the per-session lock;
/// the caller holds it for the whole turn.
pub struct SessionManager {
    sessions: DashMap<String, Arc<Mutex<SessionState>>>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Mint a fresh session id and create its entry.
    pub fn create_session(&self) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        self.checkout(&session_id);
        session_id
    }

    /// Evict sessions idle longer than the configured expiry. Returns the
    /// number evicted.
    pub fn cleanup_stale(&self) -> usize {
        let expiry = Duration::seconds(self.config.idle_expiry_secs as i64);
        let stale: Vec<String> = self
            .sessions
            .iter()
            .filter_map(|entry| {
                let state = entry.value().lock().ok()?;
                (state.idle_duration() > expiry).then(|| entry.key().clone())
            })
            .collect();
        let count = stale.len();
        for session_id in stale {
            self.sessions.remove(&session_id);
        }
        if count > 0 {
            info!(evicted = count, remaining = self.sessions.len(), "session cleanup");
        }
        count
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl ISessionStore for SessionManager {
    fn checkout(&self, session_id: &str) -> Arc<Mutex<SessionState>> {
        let entry = self.sessions.entry(session_id.to_string()).or_insert_with(|| {
            debug!(session_id, "creating session");
            Arc::new(Mutex::new(SessionState::new(session_id.to_string())))
        });
        Arc::clone(entry.value())
    }

    fn remove(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_creates_once() {
        let manager = SessionManager::default();
        let first = manager.checkout("s1");
        first.lock().unwrap().touch();
        let second = manager.checkout("s1");
        assert_eq!(second.lock().unwrap().turns, 1);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn minted_ids_are_distinct() {
        let manager = SessionManager::default();
        let a = manager.create_session();
        let b = manager.create_session();
        assert_ne!(a, b);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_reports_presence() {
        let manager = SessionManager::default();
        manager.checkout("s1");
        assert!(manager.remove("s1"));
        assert!(!manager.remove("s1"));
        assert!(manager.is_empty());
    }

    #[test]
    fn cleanup_evicts_only_stale_sessions() {
        let manager = SessionManager::new(SessionConfig { idle_expiry_secs: 0 });
        {
            let session = manager.checkout("old");
            let mut state = session.lock().unwrap();
            state.last_activity = chrono::Utc::now() - Duration::seconds(10);
        }
        assert_eq!(manager.cleanup_stale(), 1);
        assert_eq!(manager.len(), 0);
    }
}
