//! Configuration, one struct per subsystem, all TOML-loadable with full
//! serde defaults so a missing or partial file always yields a working
//! system.

mod evaluation_config;
mod retrieval_config;
mod session_config;

pub use evaluation_config::EvaluationConfig;
pub use retrieval_config::RetrievalConfig;
pub use session_config::SessionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::StylistError;

pub(crate) mod defaults {
    pub const DEFAULT_SESSION_IDLE_EXPIRY_SECS: u64 = 1800;
    pub const DEFAULT_QUALITY_EXCELLENT: f64 = 0.8;
    pub const DEFAULT_QUALITY_GOOD: f64 = 0.6;
    pub const DEFAULT_SUGGEST_RELEVANCE_BELOW: f64 = 0.6;
    pub const DEFAULT_SUGGEST_DIVERSITY_BELOW: f64 = 0.5;
    pub const DEFAULT_SUGGEST_NOVELTY_BELOW: f64 = 0.3;
    pub const DEFAULT_SUGGEST_COVERAGE_BELOW: f64 = 0.7;
}

/// Root configuration for the whole system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StylistConfig {
    pub retrieval: RetrievalConfig,
    pub evaluation: EvaluationConfig,
    pub session: SessionConfig,
}

impl StylistConfig {
    /// Parse a TOML document; missing sections fall back to defaults.
    pub fn from_toml(text: &str) -> Result<Self, StylistError> {
        toml::from_str(text).map_err(|e| StylistError::Config {
            reason: e.to_string(),
        })
    }
}
