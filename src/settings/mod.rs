//! Settings module for mailfrom.
//!
//! This module provides the persisted key-value settings store and the
//! sender-settings operations built on top of it:
//! - Generic get/set access to the settings table
//! - Loading and saving the sender name/email overrides
//! - Snapshotting the overrides for mail resolution

mod repository;
mod service;
mod store;

pub use repository::SettingsRepository;
pub use service::{SenderSettings, SenderSettingsUpdate, SettingsService};
pub use store::{SettingsStore, SENDER_EMAIL_KEY, SENDER_NAME_KEY};
