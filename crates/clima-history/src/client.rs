//! Async wrapper around the history store.
//!
//! Store calls are blocking rusqlite work, so they run on the blocking pool
//! behind a shared mutex.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tokio::task;

use crate::record::{HistoryRecord, NewHistoryRecord};
use crate::store::SqliteHistoryStore;

/// Shared async interface to the SQLite history store.
#[derive(Clone)]
pub struct HistoryClient {
    store: Arc<Mutex<SqliteHistoryStore>>,
}

impl HistoryClient {
    pub fn new(store: SqliteHistoryStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Append a record.
    pub async fn insert(&self, record: NewHistoryRecord) -> Result<HistoryRecord> {
        let store = self.store.clone();
        task::spawn_blocking(move || store.lock().insert(&record)).await?
    }

    /// Most recent `limit` records for an owner, newest first.
    pub async fn recent(&self, owner_id: &str, limit: u32) -> Result<Vec<HistoryRecord>> {
        let store = self.store.clone();
        let owner_id = owner_id.to_string();
        task::spawn_blocking(move || store.lock().recent(&owner_id, limit)).await?
    }
}
