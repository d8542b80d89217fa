//! Sender override module for mailfrom.
//!
//! This module provides the outgoing-mail sender resolution:
//! - Pure resolvers over a stored-override snapshot
//! - The filter hook point the mail pipeline invokes per outgoing message
//! - The pipeline integration applying registered filters to host defaults

mod pipeline;
mod resolver;

pub use pipeline::{FilterChain, MailFilter, MailPipeline, SenderIdentity, StoredSenderFilter};
pub use resolver::SenderOverride;
