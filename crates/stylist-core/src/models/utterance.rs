use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user turn's raw text. Immutable, created once per turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Query length in characters (not bytes — the vocabulary is Korean).
    pub fn char_len(&self) -> usize {
        self.text.trim().chars().count()
    }
}
