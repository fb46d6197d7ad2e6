use serde::{Deserialize, Serialize};

use super::defaults;

/// Session-store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions idle longer than this are eligible for cleanup (seconds).
    pub idle_expiry_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_expiry_secs: defaults::DEFAULT_SESSION_IDLE_EXPIRY_SECS,
        }
    }
}
