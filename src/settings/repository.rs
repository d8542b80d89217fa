//! Settings repository for mailfrom.
//!
//! This module provides read/write access to the settings table.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::store::SettingsStore;
use crate::{Database, MailfromError, Result};

/// Repository for settings key-value operations.
pub struct SettingsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new SettingsRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a setting value by key.
    ///
    /// Returns `None` if the key has never been set.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let result: Option<String> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
                .bind(key)
                .fetch_optional(self.pool)
                .await
                .map_err(|e| MailfromError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Set a setting value, creating or replacing the entry.
    ///
    /// Last write wins; the updated_at timestamp is refreshed on every write.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .execute(self.pool)
        .await
        .map_err(|e| MailfromError::Database(e.to_string()))?;

        Ok(())
    }

    /// Count all stored settings.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM settings")
            .fetch_one(self.pool)
            .await
            .map_err(|e| MailfromError::Database(e.to_string()))?;
        Ok(count)
    }
}

#[async_trait]
impl SettingsStore for Database {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        SettingsRepository::new(self.pool()).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        SettingsRepository::new(self.pool()).set(key, value).await
    }
}
