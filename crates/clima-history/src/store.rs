//! SQLite-backed search history.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::record::{HistoryRecord, NewHistoryRecord};

/// Append-only SQLite store for history records.
pub struct SqliteHistoryStore {
    conn: Connection,
}

impl SqliteHistoryStore {
    /// Open (or create) the history database at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory store, used by tests.
    pub fn in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id TEXT NOT NULL,
                city TEXT NOT NULL,
                condition TEXT NOT NULL,
                temperature_c REAL NOT NULL,
                temperature_max_c REAL NOT NULL,
                temperature_min_c REAL NOT NULL,
                humidity_pct INTEGER NOT NULL,
                description TEXT NOT NULL,
                searched_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_history_owner_searched
                ON history(owner_id, searched_at DESC);
            "#,
        )?;
        Ok(())
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<HistoryRecord> {
        let searched_at_str: String = row.get(9)?;
        let searched_at = DateTime::parse_from_rfc3339(&searched_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(HistoryRecord {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            city: row.get(2)?,
            condition: row.get(3)?,
            temperature_c: row.get(4)?,
            temperature_max_c: row.get(5)?,
            temperature_min_c: row.get(6)?,
            humidity_pct: row.get(7)?,
            description: row.get(8)?,
            searched_at,
        })
    }

    /// Append a record; returns the stored row with id and timestamp assigned.
    pub fn insert(&self, record: &NewHistoryRecord) -> anyhow::Result<HistoryRecord> {
        let searched_at = Utc::now();

        self.conn.execute(
            "INSERT INTO history (owner_id, city, condition, temperature_c, temperature_max_c,
                                  temperature_min_c, humidity_pct, description, searched_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                record.owner_id,
                record.city,
                record.condition,
                record.temperature_c,
                record.temperature_max_c,
                record.temperature_min_c,
                record.humidity_pct,
                record.description,
                searched_at.to_rfc3339(),
            ],
        )?;

        Ok(HistoryRecord {
            id: self.conn.last_insert_rowid(),
            owner_id: record.owner_id.clone(),
            city: record.city.clone(),
            condition: record.condition.clone(),
            temperature_c: record.temperature_c,
            temperature_max_c: record.temperature_max_c,
            temperature_min_c: record.temperature_min_c,
            humidity_pct: record.humidity_pct,
            description: record.description.clone(),
            searched_at,
        })
    }

    /// Most recent `limit` records for an owner, newest first.
    pub fn recent(&self, owner_id: &str, limit: u32) -> anyhow::Result<Vec<HistoryRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, owner_id, city, condition, temperature_c, temperature_max_c,
                    temperature_min_c, humidity_pct, description, searched_at
             FROM history
             WHERE owner_id = ?1
             ORDER BY searched_at DESC, id DESC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![owner_id, limit], Self::row_to_record)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Total stored records, all owners.
    pub fn count(&self) -> anyhow::Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(owner: &str, city: &str) -> NewHistoryRecord {
        NewHistoryRecord {
            owner_id: owner.to_string(),
            city: city.to_string(),
            condition: "Clouds".to_string(),
            temperature_c: 21.5,
            temperature_max_c: 24.0,
            temperature_min_c: 18.0,
            humidity_pct: 65,
            description: "nublado".to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_id_and_timestamp() {
        let store = SqliteHistoryStore::in_memory().unwrap();

        let stored = store.insert(&record("user-1", "Salvador")).unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.city, "Salvador");
        assert_eq!(stored.humidity_pct, 65);
    }

    #[test]
    fn test_recent_newest_first() {
        let store = SqliteHistoryStore::in_memory().unwrap();
        store.insert(&record("user-1", "Salvador")).unwrap();
        store.insert(&record("user-1", "Fortaleza")).unwrap();
        store.insert(&record("user-1", "Natal")).unwrap();

        let recent = store.recent("user-1", 20).unwrap();
        let cities: Vec<_> = recent.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["Natal", "Fortaleza", "Salvador"]);
    }

    #[test]
    fn test_recent_scoped_to_owner() {
        let store = SqliteHistoryStore::in_memory().unwrap();
        store.insert(&record("user-1", "Salvador")).unwrap();
        store.insert(&record("user-2", "Fortaleza")).unwrap();

        let recent = store.recent("user-1", 20).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].owner_id, "user-1");
    }

    #[test]
    fn test_recent_respects_limit() {
        let store = SqliteHistoryStore::in_memory().unwrap();
        for i in 0..5 {
            store.insert(&record("user-1", &format!("City {i}"))).unwrap();
        }

        let recent = store.recent("user-1", 3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].city, "City 4");
    }

    #[test]
    fn test_count_spans_owners() {
        let store = SqliteHistoryStore::in_memory().unwrap();
        store.insert(&record("user-1", "Salvador")).unwrap();
        store.insert(&record("user-2", "Fortaleza")).unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_persists_across_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.db");

        {
            let store = SqliteHistoryStore::new(&path).unwrap();
            store.insert(&record("user-1", "Salvador")).unwrap();
        }

        let store = SqliteHistoryStore::new(&path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }
}
