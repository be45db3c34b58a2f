//! portal-core - Server-side core for the grievance portal
//!
//! Provides the notification store, session registry, event bus, and server
//! configuration consumed by the web crate and the CLI.

pub mod auth;
pub mod config;
pub mod error;
pub mod event;
pub mod store;

pub use auth::SessionStore;
pub use config::ServerConfig;
pub use error::PortalError;
pub use event::{EventBus, NotificationEvent};
pub use store::NotificationStore;
