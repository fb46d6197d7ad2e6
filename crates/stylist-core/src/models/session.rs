use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::intent::FeedbackKind;
use super::preference::PreferenceProfile;

/// Session-scoped state owned by exactly one in-flight turn at a time.
///
/// Mutation happens only on the turn's commit path, so a failed attempt
/// (collaborator error mid-pipeline) leaves the session untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    /// Accumulated preferences for the session's lifetime.
    pub preferences: PreferenceProfile,
    /// Every candidate id the user has been shown.
    pub seen_ids: HashSet<String>,
    /// Ids from the most recent accepted recommendation, in rank order.
    pub last_result_ids: Vec<String>,
    pub last_feedback: Option<FeedbackKind>,
    pub turns: u64,
}

impl SessionState {
    pub fn new(session_id: String) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            created_at: now,
            last_activity: now,
            preferences: PreferenceProfile::new(),
            seen_ids: HashSet::new(),
            last_result_ids: Vec::new(),
            last_feedback: None,
            turns: 0,
        }
    }

    /// Whether a prior recommendation exists for feedback detection.
    pub fn has_prior_result(&self) -> bool {
        !self.last_result_ids.is_empty()
    }

    /// Record an accepted recommendation.
    pub fn record_result(&mut self, ids: Vec<String>) {
        for id in &ids {
            self.seen_ids.insert(id.clone());
        }
        self.last_result_ids = ids;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
        self.turns += 1;
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }
}
