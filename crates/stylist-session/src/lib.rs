//! # stylist-session
//!
//! In-memory session store. One entry per session id, each behind its own
//! mutex so interleaved turns from the same session serialize while
//! different sessions never contend.

pub mod manager;

pub use manager::SessionManager;
