//! Notification store backed by rusqlite
//!
//! Single connection behind parking_lot::Mutex; every insert is broadcast on
//! the event bus so SSE clients see new rows without polling.

use crate::error::PortalError;
use crate::event::{EventBus, NotificationEvent};
use chrono::Utc;
use parking_lot::Mutex;
use portal_types::Notification;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS notifications (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id      INTEGER NOT NULL,
    message      TEXT NOT NULL,
    grievance_id INTEGER NOT NULL,
    is_read      INTEGER NOT NULL DEFAULT 0,
    created_at   TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_notifications_unread
    ON notifications (user_id, is_read, created_at);
";

/// Notification store shared between API handlers
///
/// Owns the event bus: inserting a row and announcing it are one operation
/// from the caller's point of view.
pub struct NotificationStore {
    conn: Mutex<Connection>,
    event_bus: EventBus,
}

impl NotificationStore {
    /// Open (and migrate) a store at the given path
    pub fn open(path: &Path) -> Result<Self, PortalError> {
        let conn = Connection::open(path).map_err(PortalError::db("opening database"))?;
        Self::with_connection(conn)
    }

    /// In-memory store, used by tests and ephemeral deployments
    pub fn open_in_memory() -> Result<Self, PortalError> {
        let conn = Connection::open_in_memory().map_err(PortalError::db("opening database"))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, PortalError> {
        conn.execute_batch(SCHEMA)
            .map_err(PortalError::db("creating schema"))?;
        Ok(Self {
            conn: Mutex::new(conn),
            event_bus: EventBus::default_capacity(),
        })
    }

    /// Bus carrying `NotificationEvent`s for this store
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Insert an unread notification and broadcast it
    pub fn insert(
        &self,
        user_id: i64,
        message: &str,
        grievance_id: i64,
    ) -> Result<Notification, PortalError> {
        let created_at = Utc::now().to_rfc3339();
        let id = {
            let conn = self.conn.lock();
            conn.execute(
                "INSERT INTO notifications (user_id, message, grievance_id, is_read, created_at)
                 VALUES (?1, ?2, ?3, 0, ?4)",
                params![user_id, message, grievance_id, created_at],
            )
            .map_err(PortalError::db("inserting notification"))?;
            conn.last_insert_rowid()
        };

        let notification = Notification {
            id,
            user_id,
            message: message.to_string(),
            grievance_id,
            is_read: false,
            created_at,
        };
        debug!(id, user_id, "notification created");
        self.event_bus
            .publish(NotificationEvent::Created(notification.clone()));
        Ok(notification)
    }

    /// Unread notifications for a user, newest first, bounded by `limit`
    pub fn unread_for_user(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<Notification>, PortalError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare(
                "SELECT id, user_id, message, grievance_id, is_read, created_at
                 FROM notifications
                 WHERE user_id = ?1 AND is_read = 0
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?2",
            )
            .map_err(PortalError::db("preparing unread query"))?;
        let rows = stmt
            .query_map(params![user_id, limit as i64], |row| {
                Ok(Notification {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    message: row.get(2)?,
                    grievance_id: row.get(3)?,
                    is_read: row.get::<_, i64>(4)? != 0,
                    created_at: row.get(5)?,
                })
            })
            .map_err(PortalError::db("querying unread notifications"))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(PortalError::db("reading unread notifications"))
    }

    /// Mark a notification read, scoped to its owner
    ///
    /// Returns false when no row matched (unknown id or foreign user).
    pub fn mark_read(&self, id: i64, user_id: i64) -> Result<bool, PortalError> {
        let changed = self
            .conn
            .lock()
            .execute(
                "UPDATE notifications SET is_read = 1 WHERE id = ?1 AND user_id = ?2",
                params![id, user_id],
            )
            .map_err(PortalError::db("marking notification read"))?;
        if changed > 0 {
            debug!(id, user_id, "notification marked read");
        }
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_is_bounded_and_newest_first() {
        let store = NotificationStore::open_in_memory().unwrap();
        for i in 0..12 {
            store.insert(1, &format!("update {i}"), i).unwrap();
        }
        // Rows for other users never leak in
        store.insert(2, "not yours", 99).unwrap();

        let unread = store.unread_for_user(1, 10).unwrap();
        assert_eq!(unread.len(), 10);
        // Timestamps can tie within a test run; id DESC breaks the tie
        let ids: Vec<i64> = unread.iter().map(|n| n.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted);
        assert!(unread.iter().all(|n| n.user_id == 1 && !n.is_read));
    }

    #[test]
    fn test_mark_read_evicts_from_unread() {
        let store = NotificationStore::open_in_memory().unwrap();
        let n = store.insert(1, "assigned to you", 5).unwrap();
        store.insert(1, "status changed", 5).unwrap();

        assert!(store.mark_read(n.id, 1).unwrap());

        let unread = store.unread_for_user(1, 10).unwrap();
        assert_eq!(unread.len(), 1);
        assert!(unread.iter().all(|u| u.id != n.id));
    }

    #[test]
    fn test_mark_read_scoped_to_owner() {
        let store = NotificationStore::open_in_memory().unwrap();
        let n = store.insert(1, "yours", 5).unwrap();

        assert!(!store.mark_read(n.id, 2).unwrap());
        assert!(!store.mark_read(9999, 1).unwrap());
        assert_eq!(store.unread_for_user(1, 10).unwrap().len(), 1);
    }

    #[test]
    fn test_insert_publishes_event() {
        let store = NotificationStore::open_in_memory().unwrap();
        let mut rx = store.event_bus().subscribe();

        let n = store.insert(3, "new comment", 8).unwrap();

        let event = rx.try_recv().unwrap();
        let NotificationEvent::Created(published) = event;
        assert_eq!(published, n);
    }

    #[test]
    fn test_open_on_disk_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.db");
        {
            let store = NotificationStore::open(&path).unwrap();
            store.insert(1, "persisted", 1).unwrap();
        }
        let reopened = NotificationStore::open(&path).unwrap();
        assert_eq!(reopened.unread_for_user(1, 10).unwrap().len(), 1);
    }
}
