//! Search history for Clima
//!
//! Persists one record per successful lookup, keyed by the owning user, and
//! reads back the most recent entries. Writes from the lookup flow are
//! best-effort: they go through a background worker and never fail a lookup.

pub mod client;
pub mod record;
pub mod store;
pub mod writer;

pub use client::HistoryClient;
pub use record::{HistoryRecord, NewHistoryRecord};
pub use store::SqliteHistoryStore;
pub use writer::{HistoryWriter, HistoryWriterHandle};

/// Default number of records shown by the history surface.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;
