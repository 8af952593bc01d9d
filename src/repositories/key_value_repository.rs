// src/repositories/key_value_repository.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::{get_connection, ConnectionPool};
use crate::error::{AppError, AppResult};

/// String-valued slots addressed by key
pub trait KeyValueRepository: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteKeyValueRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}

/// Process-local slots; used by tests and when the database cannot be opened
#[derive(Default)]
pub struct InMemoryKeyValueRepository {
    slots: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueRepository for InMemoryKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| AppError::Other("Key-value store lock poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| AppError::Other("Key-value store lock poisoned".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, initialize_database};

    fn sqlite_repo(dir: &tempfile::TempDir) -> SqliteKeyValueRepository {
        let pool = create_connection_pool(&dir.path().join("kv.db")).unwrap();
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        SqliteKeyValueRepository::new(Arc::new(pool))
    }

    #[test]
    fn test_sqlite_get_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let repo = sqlite_repo(&dir);
        assert_eq!(repo.get("absent").unwrap(), None);
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let repo = sqlite_repo(&dir);

        repo.set("slot", "[]").unwrap();
        repo.set("slot", "[1]").unwrap();
        assert_eq!(repo.get("slot").unwrap().as_deref(), Some("[1]"));
        assert_eq!(repo.get("other").unwrap(), None);
    }

    #[test]
    fn test_sqlite_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        sqlite_repo(&dir).set("slot", "kept").unwrap();

        let reopened = sqlite_repo(&dir);
        assert_eq!(reopened.get("slot").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_in_memory_slots() {
        let repo = InMemoryKeyValueRepository::new();
        assert_eq!(repo.get("slot").unwrap(), None);
        repo.set("slot", "value").unwrap();
        assert_eq!(repo.get("slot").unwrap().as_deref(), Some("value"));
        repo.set("slot", "replaced").unwrap();
        assert_eq!(repo.get("slot").unwrap().as_deref(), Some("replaced"));
    }
}
