//! Fire-and-forget history persistence.
//!
//! Lookup flows submit insert jobs over a channel; a background worker drains
//! it and logs failures. A failed write never reaches the caller: lookup
//! success is independent of history-write success.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::HistoryClient;
use crate::record::NewHistoryRecord;

/// Submits history inserts without waiting for the outcome.
#[derive(Debug, Clone)]
pub struct HistoryWriterHandle {
    tx: mpsc::UnboundedSender<NewHistoryRecord>,
}

impl HistoryWriterHandle {
    /// Queue a record for insertion. Returns immediately; if the worker is
    /// gone the record is dropped and the loss is logged.
    pub fn submit(&self, record: NewHistoryRecord) {
        if self.tx.send(record).is_err() {
            tracing::warn!("History writer unavailable, dropping record");
        }
    }
}

/// Background worker that persists submitted records.
pub struct HistoryWriter;

impl HistoryWriter {
    /// Spawn the worker task. The returned handle feeds it; the join handle
    /// completes once every submitting handle has been dropped and the queue
    /// has drained.
    pub fn spawn(client: HistoryClient) -> (HistoryWriterHandle, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<NewHistoryRecord>();

        let worker = tokio::spawn(async move {
            while let Some(record) = rx.recv().await {
                let city = record.city.clone();
                match client.insert(record).await {
                    Ok(stored) => {
                        tracing::debug!("Recorded search {} for {}", stored.id, stored.city);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to record search for {}: {}", city, e);
                    }
                }
            }
        });

        (HistoryWriterHandle { tx }, worker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteHistoryStore;

    fn record(city: &str) -> NewHistoryRecord {
        NewHistoryRecord {
            owner_id: "user-1".to_string(),
            city: city.to_string(),
            condition: "Rain".to_string(),
            temperature_c: 17.0,
            temperature_max_c: 19.0,
            temperature_min_c: 14.0,
            humidity_pct: 90,
            description: "chuva moderada".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submitted_record_is_persisted() {
        let client = HistoryClient::new(SqliteHistoryStore::in_memory().unwrap());
        let (handle, worker) = HistoryWriter::spawn(client.clone());

        handle.submit(record("Porto Alegre"));
        drop(handle);
        worker.await.unwrap();

        let recent = client.recent("user-1", 20).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].city, "Porto Alegre");
    }

    #[tokio::test]
    async fn test_submit_after_worker_gone_does_not_panic() {
        let client = HistoryClient::new(SqliteHistoryStore::in_memory().unwrap());
        let (handle, worker) = HistoryWriter::spawn(client);

        worker.abort();
        let _ = worker.await;

        // The channel may linger briefly after abort; submitting must never
        // panic or block either way.
        handle.submit(record("Cuiabá"));
    }

    #[tokio::test]
    async fn test_records_drain_in_submission_order() {
        let client = HistoryClient::new(SqliteHistoryStore::in_memory().unwrap());
        let (handle, worker) = HistoryWriter::spawn(client.clone());

        handle.submit(record("A"));
        handle.submit(record("B"));
        handle.submit(record("C"));
        drop(handle);
        worker.await.unwrap();

        let recent = client.recent("user-1", 20).await.unwrap();
        let cities: Vec<_> = recent.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["C", "B", "A"]);
    }
}
