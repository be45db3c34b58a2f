//! portal-types - Shared data types for the grievance portal
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - portal-core (server-side store and sessions)
//! - portal-web (frontend WASM and API router)

pub mod models;

pub use models::{Notification, Role, SessionInfo};
