//! Web API module for mailfrom.
//!
//! This module provides the REST API behind the admin settings form,
//! allowing an administrator to view and change the outgoing-mail sender
//! overrides.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
