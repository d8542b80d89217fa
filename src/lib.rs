//! mailfrom - Outgoing Mail Sender Override Service
//!
//! A small service that lets an administrator override the "From" name and
//! email address used by an application's outgoing mail.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod sender;
pub mod settings;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{MailfromError, Result};
pub use sender::{
    FilterChain, MailFilter, MailPipeline, SenderIdentity, SenderOverride, StoredSenderFilter,
};
pub use settings::{
    SenderSettings, SenderSettingsUpdate, SettingsRepository, SettingsService, SettingsStore,
    SENDER_EMAIL_KEY, SENDER_NAME_KEY,
};
pub use web::WebServer;
