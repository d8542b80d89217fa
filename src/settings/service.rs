//! Sender settings service for mailfrom.
//!
//! This module provides the operations behind the admin settings form:
//! loading the stored sender overrides, persisting updates, and producing
//! the override snapshot used during mail resolution.

use crate::sender::SenderOverride;
use crate::Database;
use crate::Result;

use super::repository::SettingsRepository;
use super::store::{SENDER_EMAIL_KEY, SENDER_NAME_KEY};

/// Stored sender settings as read from the settings store.
///
/// A `None` field means the setting has never been saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderSettings {
    /// Stored sender display name, verbatim.
    pub name: Option<String>,
    /// Stored sender email address, verbatim.
    pub email: Option<String>,
}

/// Update to the sender settings.
///
/// Only fields that are set will be written; the others are left untouched.
/// Values are persisted verbatim, including the empty string (which reads
/// back as "no override" at resolution time).
#[derive(Debug, Clone, Default)]
pub struct SenderSettingsUpdate {
    /// New sender display name, if changing.
    pub name: Option<String>,
    /// New sender email address, if changing.
    pub email: Option<String>,
}

impl SenderSettingsUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the sender email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check if the update contains no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Service for sender settings operations.
pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    /// Create a new SettingsService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Load the stored sender settings.
    pub async fn sender_settings(&self) -> Result<SenderSettings> {
        let repo = SettingsRepository::new(self.db.pool());
        let name = repo.get(SENDER_NAME_KEY).await?;
        let email = repo.get(SENDER_EMAIL_KEY).await?;
        Ok(SenderSettings { name, email })
    }

    /// Persist a sender settings update and return the resulting settings.
    pub async fn update_sender(&self, update: &SenderSettingsUpdate) -> Result<SenderSettings> {
        let repo = SettingsRepository::new(self.db.pool());

        if let Some(ref name) = update.name {
            repo.set(SENDER_NAME_KEY, name).await?;
        }
        if let Some(ref email) = update.email {
            repo.set(SENDER_EMAIL_KEY, email).await?;
        }

        self.sender_settings().await
    }

    /// Snapshot the stored overrides for mail resolution.
    pub async fn sender_override(&self) -> Result<SenderOverride> {
        let settings = self.sender_settings().await?;
        Ok(SenderOverride::new(settings.name, settings.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_sender_settings_initially_absent() {
        let db = setup_db().await;
        let service = SettingsService::new(&db);

        let settings = service.sender_settings().await.unwrap();
        assert!(settings.name.is_none());
        assert!(settings.email.is_none());
    }

    #[tokio::test]
    async fn test_update_both_fields() {
        let db = setup_db().await;
        let service = SettingsService::new(&db);

        let update = SenderSettingsUpdate::new()
            .name("Example Support")
            .email("support@example.com");
        let settings = service.update_sender(&update).await.unwrap();

        assert_eq!(settings.name, Some("Example Support".to_string()));
        assert_eq!(settings.email, Some("support@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_update_single_field_leaves_other_untouched() {
        let db = setup_db().await;
        let service = SettingsService::new(&db);

        service
            .update_sender(
                &SenderSettingsUpdate::new()
                    .name("Example Support")
                    .email("support@example.com"),
            )
            .await
            .unwrap();

        let settings = service
            .update_sender(&SenderSettingsUpdate::new().name("New Name"))
            .await
            .unwrap();

        assert_eq!(settings.name, Some("New Name".to_string()));
        assert_eq!(settings.email, Some("support@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_empty_update_is_noop() {
        let db = setup_db().await;
        let service = SettingsService::new(&db);

        let update = SenderSettingsUpdate::new();
        assert!(update.is_empty());

        let settings = service.update_sender(&update).await.unwrap();
        assert!(settings.name.is_none());
        assert!(settings.email.is_none());
    }

    #[tokio::test]
    async fn test_values_persisted_verbatim() {
        let db = setup_db().await;
        let service = SettingsService::new(&db);

        // Leading/trailing whitespace is not trimmed by the store
        let update = SenderSettingsUpdate::new().name("  Spaced Name  ");
        let settings = service.update_sender(&update).await.unwrap();

        assert_eq!(settings.name, Some("  Spaced Name  ".to_string()));
    }

    #[tokio::test]
    async fn test_sender_override_snapshot() {
        let db = setup_db().await;
        let service = SettingsService::new(&db);

        service
            .update_sender(&SenderSettingsUpdate::new().email("support@example.com"))
            .await
            .unwrap();

        let overrides = service.sender_override().await.unwrap();
        assert_eq!(
            overrides.resolve_from_email("noreply@host.com"),
            "support@example.com"
        );
        assert_eq!(overrides.resolve_from_name("WordPress"), "WordPress");
    }

    #[tokio::test]
    async fn test_clearing_with_empty_string() {
        let db = setup_db().await;
        let service = SettingsService::new(&db);

        service
            .update_sender(
                &SenderSettingsUpdate::new()
                    .name("Example Support")
                    .email("support@example.com"),
            )
            .await
            .unwrap();

        let settings = service
            .update_sender(&SenderSettingsUpdate::new().name("").email(""))
            .await
            .unwrap();

        // Stored as empty entries, which resolve as "no override"
        assert_eq!(settings.name, Some(String::new()));
        assert_eq!(settings.email, Some(String::new()));

        let overrides = service.sender_override().await.unwrap();
        assert_eq!(
            overrides.resolve_from_email("noreply@host.com"),
            "noreply@host.com"
        );
        assert_eq!(overrides.resolve_from_name("WordPress"), "WordPress");
    }
}
