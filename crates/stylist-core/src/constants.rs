/// Stylist system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum adjustment passes per user turn. Once reached, the orchestrator
/// accepts the best available result regardless of evaluation outcome.
pub const MAX_ADJUSTMENTS: u8 = 2;

/// Default number of recommendations returned per turn.
pub const DEFAULT_REQUESTED_COUNT: usize = 5;

/// Each retrieval stage fetches `requested_count * FETCH_MULTIPLIER`
/// candidates so that deduplication and ranking have slack to work with.
pub const FETCH_MULTIPLIER: usize = 2;

/// Query length (in chars) above which free text is considered "long"
/// for strategy selection.
pub const LONG_QUERY_CHARS: usize = 10;

/// Query length (in chars) above which free text is considered "medium".
pub const MEDIUM_QUERY_CHARS: usize = 5;

/// Review count at which the review-volume signal saturates to 1.0.
pub const REVIEW_VOLUME_CAP: u64 = 1000;

/// Size-option count at which the attribute-diversity signal saturates.
pub const SIZE_COUNT_CAP: u32 = 10;

/// Maximum item rating on the source platform's scale.
pub const MAX_RATING: f64 = 5.0;

/// Popularity floor used by the final retrieval fallback stage.
pub const POPULARITY_MIN_RATING: f64 = 4.0;
pub const POPULARITY_MIN_REVIEWS: u64 = 100;

/// Won boundary between the budget and mid price bands.
pub const PRICE_BUDGET_MAX_WON: u32 = 30_000;

/// Won boundary between the mid and premium price bands.
pub const PRICE_MID_MAX_WON: u32 = 70_000;

/// Default per-call timeout collaborator implementations should enforce.
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 3000;

/// Fixed novelty score when the user has no prior-seen history.
pub const NOVELTY_NO_HISTORY: f64 = 0.7;

/// Fixed diversity score for result sets with fewer than two items.
pub const DIVERSITY_SINGLETON: f64 = 0.5;
