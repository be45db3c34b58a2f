//! Error types for portal-core

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Database error while {context}")]
    Database {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Notification not found: {id}")]
    NotificationNotFound { id: i64 },

    #[error("Failed to read config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl PortalError {
    /// Wrap a rusqlite error with the operation it interrupted
    pub(crate) fn db(context: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Database { context, source }
    }
}
