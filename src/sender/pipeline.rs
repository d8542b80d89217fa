//! Outgoing-mail metadata pipeline.
//!
//! The pipeline is the integration point between the host's mail composition
//! and the stored sender overrides. Filters are registered once at startup;
//! each outgoing message then asks the pipeline for the effective sender
//! identity, which applies the registered filters to the host defaults in
//! registration order.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::settings::{SettingsStore, SENDER_EMAIL_KEY, SENDER_NAME_KEY};

use super::resolver::SenderOverride;

/// Sender identity of an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdentity {
    /// Sender display name.
    pub name: String,
    /// Sender email address.
    pub email: String,
}

impl SenderIdentity {
    /// Create a new sender identity.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Hook point invoked by the mail pipeline while composing a message.
///
/// Each method receives the current value and returns the (possibly
/// replaced) value. Implementations must not fail message composition;
/// when a filter cannot produce a replacement it returns its input.
#[async_trait]
pub trait MailFilter: Send + Sync {
    /// Filter the sender display name.
    async fn filter_from_name(&self, current: String) -> String;

    /// Filter the sender email address.
    async fn filter_from_email(&self, current: String) -> String;
}

/// Ordered collection of registered mail filters.
///
/// Filters are applied in registration order, each output feeding the next.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Arc<dyn MailFilter>>,
}

impl FilterChain {
    /// Create an empty filter chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter at the end of the chain.
    pub fn register(&mut self, filter: Arc<dyn MailFilter>) {
        self.filters.push(filter);
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain has no registered filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all registered filters to a sender display name.
    pub async fn apply_from_name(&self, value: String) -> String {
        let mut value = value;
        for filter in &self.filters {
            value = filter.filter_from_name(value).await;
        }
        value
    }

    /// Apply all registered filters to a sender email address.
    pub async fn apply_from_email(&self, value: String) -> String {
        let mut value = value;
        for filter in &self.filters {
            value = filter.filter_from_email(value).await;
        }
        value
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Mail filter backed by the stored sender overrides.
///
/// Loads a fresh override snapshot per invocation so that settings saved
/// through the admin form take effect on the next outgoing message. A store
/// read failure keeps the current value; resolution never fails a message.
pub struct StoredSenderFilter {
    store: Arc<dyn SettingsStore>,
}

impl StoredSenderFilter {
    /// Create a new filter reading overrides from the given store.
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Load the current override snapshot from the store.
    async fn load_override(&self) -> crate::Result<SenderOverride> {
        let name = self.store.get(SENDER_NAME_KEY).await?;
        let email = self.store.get(SENDER_EMAIL_KEY).await?;
        Ok(SenderOverride::new(name, email))
    }
}

#[async_trait]
impl MailFilter for StoredSenderFilter {
    async fn filter_from_name(&self, current: String) -> String {
        match self.load_override().await {
            Ok(overrides) => overrides.resolve_from_name(&current),
            Err(e) => {
                warn!(error = %e, "Failed to load sender name override, keeping current value");
                current
            }
        }
    }

    async fn filter_from_email(&self, current: String) -> String {
        match self.load_override().await {
            Ok(overrides) => overrides.resolve_from_email(&current),
            Err(e) => {
                warn!(error = %e, "Failed to load sender email override, keeping current value");
                current
            }
        }
    }
}

/// Mail pipeline integration point.
///
/// Holds the host default sender identity and the registered filter chain.
/// The host's mail composition calls [`MailPipeline::resolve_sender`] once
/// per outgoing message.
pub struct MailPipeline {
    defaults: SenderIdentity,
    chain: FilterChain,
}

impl MailPipeline {
    /// Create a new pipeline with the given host default identity.
    pub fn new(defaults: SenderIdentity) -> Self {
        Self {
            defaults,
            chain: FilterChain::new(),
        }
    }

    /// Register a filter on the pipeline.
    pub fn register(&mut self, filter: Arc<dyn MailFilter>) {
        self.chain.register(filter);
    }

    /// Get the host default sender identity.
    pub fn defaults(&self) -> &SenderIdentity {
        &self.defaults
    }

    /// Resolve the effective sender identity for one outgoing message.
    pub async fn resolve_sender(&self) -> SenderIdentity {
        SenderIdentity {
            name: self.chain.apply_from_name(self.defaults.name.clone()).await,
            email: self
                .chain
                .apply_from_email(self.defaults.email.clone())
                .await,
        }
    }
}

impl std::fmt::Debug for MailPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailPipeline")
            .field("defaults", &self.defaults)
            .field("chain", &self.chain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MailfromError, Result};
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    /// In-memory settings store double.
    #[derive(Default)]
    struct MemoryStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl MemoryStore {
        async fn seed(&self, key: &str, value: &str) {
            self.entries
                .lock()
                .await
                .insert(key.to_string(), value.to_string());
        }
    }

    #[async_trait]
    impl SettingsStore for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .lock()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Settings store double that always fails.
    struct BrokenStore;

    #[async_trait]
    impl SettingsStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(MailfromError::Database("store unavailable".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(MailfromError::Database("store unavailable".to_string()))
        }
    }

    /// Filter double that tags values, for observing chain order.
    struct TagFilter(&'static str);

    #[async_trait]
    impl MailFilter for TagFilter {
        async fn filter_from_name(&self, current: String) -> String {
            format!("{}+{}", current, self.0)
        }

        async fn filter_from_email(&self, current: String) -> String {
            format!("{}+{}", current, self.0)
        }
    }

    #[tokio::test]
    async fn test_empty_chain_passes_value_through() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());

        let value = chain.apply_from_name("WordPress".to_string()).await;
        assert_eq!(value, "WordPress");
    }

    #[tokio::test]
    async fn test_chain_applies_in_registration_order() {
        let mut chain = FilterChain::new();
        chain.register(Arc::new(TagFilter("a")));
        chain.register(Arc::new(TagFilter("b")));
        assert_eq!(chain.len(), 2);

        let value = chain.apply_from_name("x".to_string()).await;
        assert_eq!(value, "x+a+b");
    }

    #[tokio::test]
    async fn test_stored_filter_no_override_keeps_default() {
        let store = Arc::new(MemoryStore::default());
        let filter = StoredSenderFilter::new(store);

        let email = filter
            .filter_from_email("noreply@host.com".to_string())
            .await;
        assert_eq!(email, "noreply@host.com");
    }

    #[tokio::test]
    async fn test_stored_filter_applies_override() {
        let store = Arc::new(MemoryStore::default());
        store.seed(SENDER_EMAIL_KEY, "support@example.com").await;
        store.seed(SENDER_NAME_KEY, "Example Support").await;

        let filter = StoredSenderFilter::new(store);

        let email = filter
            .filter_from_email("noreply@host.com".to_string())
            .await;
        assert_eq!(email, "support@example.com");

        let name = filter.filter_from_name("WordPress".to_string()).await;
        assert_eq!(name, "Example Support");
    }

    #[tokio::test]
    async fn test_stored_filter_empty_value_keeps_default() {
        let store = Arc::new(MemoryStore::default());
        store.seed(SENDER_EMAIL_KEY, "").await;

        let filter = StoredSenderFilter::new(store);

        let email = filter
            .filter_from_email("noreply@host.com".to_string())
            .await;
        assert_eq!(email, "noreply@host.com");
    }

    #[tokio::test]
    async fn test_stored_filter_store_failure_keeps_current() {
        let filter = StoredSenderFilter::new(Arc::new(BrokenStore));

        let email = filter
            .filter_from_email("noreply@host.com".to_string())
            .await;
        assert_eq!(email, "noreply@host.com");

        let name = filter.filter_from_name("WordPress".to_string()).await;
        assert_eq!(name, "WordPress");
    }

    #[tokio::test]
    async fn test_pipeline_without_filters_returns_defaults() {
        let pipeline = MailPipeline::new(SenderIdentity::new("WordPress", "noreply@host.com"));

        let sender = pipeline.resolve_sender().await;
        assert_eq!(sender, SenderIdentity::new("WordPress", "noreply@host.com"));
    }

    #[tokio::test]
    async fn test_pipeline_with_stored_filter() {
        let store = Arc::new(MemoryStore::default());
        store.seed(SENDER_EMAIL_KEY, "support@example.com").await;

        let mut pipeline =
            MailPipeline::new(SenderIdentity::new("WordPress", "noreply@host.com"));
        pipeline.register(Arc::new(StoredSenderFilter::new(store.clone())));

        let sender = pipeline.resolve_sender().await;
        assert_eq!(sender.name, "WordPress");
        assert_eq!(sender.email, "support@example.com");

        // Settings saved later take effect on the next message
        store.seed(SENDER_NAME_KEY, "Example Support").await;
        let sender = pipeline.resolve_sender().await;
        assert_eq!(sender.name, "Example Support");
        assert_eq!(sender.email, "support@example.com");
    }

    #[tokio::test]
    async fn test_pipeline_defaults_accessor() {
        let pipeline = MailPipeline::new(SenderIdentity::new("WordPress", "noreply@host.com"));
        assert_eq!(pipeline.defaults().name, "WordPress");
        assert_eq!(pipeline.defaults().email, "noreply@host.com");
    }
}
