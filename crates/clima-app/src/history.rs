//! History listing surface.

use clima_auth::Session;
use clima_core::AppError;
use clima_history::{HistoryClient, HistoryRecord};

/// Read side of the search history.
pub struct HistoryView {
    client: HistoryClient,
    limit: u32,
}

impl HistoryView {
    pub fn new(client: HistoryClient, limit: u32) -> Self {
        Self { client, limit }
    }

    /// Most recent searches for the session's owner, newest first.
    pub async fn recent(&self, session: &Session) -> Result<Vec<HistoryRecord>, AppError> {
        let records = self.client.recent(&session.user_id, self.limit).await?;
        tracing::debug!("Loaded {} history records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_history::{NewHistoryRecord, SqliteHistoryStore};

    fn session(user_id: &str) -> Session {
        Session {
            user_id: user_id.to_string(),
            access_token: "token".to_string(),
            expires_at: chrono::Utc::now().timestamp() + 3600,
        }
    }

    fn record(owner: &str, city: &str) -> NewHistoryRecord {
        NewHistoryRecord {
            owner_id: owner.to_string(),
            city: city.to_string(),
            condition: "Clear".to_string(),
            temperature_c: 26.0,
            temperature_max_c: 29.0,
            temperature_min_c: 21.0,
            humidity_pct: 55,
            description: "céu limpo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_recent_is_scoped_and_limited() {
        let client = HistoryClient::new(SqliteHistoryStore::in_memory().unwrap());
        for i in 0..4 {
            client.insert(record("user-1", &format!("City {i}"))).await.unwrap();
        }
        client.insert(record("user-2", "Elsewhere")).await.unwrap();

        let view = HistoryView::new(client, 3);
        let records = view.recent(&session("user-1")).await.unwrap();

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.owner_id == "user-1"));
        assert_eq!(records[0].city, "City 3");
    }
}
