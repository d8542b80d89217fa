//! Settings store contract.

use async_trait::async_trait;

use crate::Result;

/// Settings key holding the sender display name override.
pub const SENDER_NAME_KEY: &str = "mail_sender_modifier_id";

/// Settings key holding the sender email address override.
pub const SENDER_EMAIL_KEY: &str = "mail_sender_modifier_email_id";

/// Contract for the generic key-value settings store.
///
/// Writes are last-write-wins; no transactional guarantees are required.
/// A missing key is not an error, it reads back as `None`.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Get a setting value, or `None` if the key has never been set.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a setting value, creating or replacing the entry.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_keys_are_distinct() {
        assert_ne!(SENDER_NAME_KEY, SENDER_EMAIL_KEY);
    }

    #[test]
    fn test_sender_key_identifiers() {
        // The persisted-state layout uses fixed identifiers; changing them
        // would orphan existing installations.
        assert_eq!(SENDER_NAME_KEY, "mail_sender_modifier_id");
        assert_eq!(SENDER_EMAIL_KEY, "mail_sender_modifier_email_id");
    }
}
