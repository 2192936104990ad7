use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted log entry of a past successful lookup.
///
/// Records are append-only: created once per lookup while a session is
/// active, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    /// Opaque owner identity from the auth backend
    pub owner_id: String,
    pub city: String,
    /// Coarse condition label at lookup time
    pub condition: String,
    pub temperature_c: f64,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    pub humidity_pct: u8,
    pub description: String,
    pub searched_at: DateTime<Utc>,
}

/// Insert request for a new history row; id and timestamp are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewHistoryRecord {
    pub owner_id: String,
    pub city: String,
    pub condition: String,
    pub temperature_c: f64,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    pub humidity_pct: u8,
    pub description: String,
}
