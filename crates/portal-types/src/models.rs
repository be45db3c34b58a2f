use serde::{Deserialize, Serialize};

/// A single notification row as stored by the backend and rendered in the
/// header dropdown.
///
/// `created_at` is an RFC 3339 timestamp string stamped by the server; the
/// frontend never parses it beyond display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    /// The grievance this notification refers to
    pub grievance_id: i64,
    pub is_read: bool,
    pub created_at: String,
}

/// Portal role attached to an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Employee,
    Admin,
}

impl Role {
    /// Employees and admins can act on grievances (and create notifications)
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Employee | Role::Admin)
    }
}

/// Authenticated identity context resolved from a session token.
///
/// Existence of a `SessionInfo` implies an authenticated user; the frontend
/// retrieves it per need and never caches it beyond a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: i64,
    pub display_name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"employee\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_role_staff() {
        assert!(!Role::User.is_staff());
        assert!(Role::Employee.is_staff());
        assert!(Role::Admin.is_staff());
    }

    #[test]
    fn test_notification_round_trip() {
        let n = Notification {
            id: 7,
            user_id: 42,
            message: "Your grievance was updated".to_string(),
            grievance_id: 3,
            is_read: false,
            created_at: "2026-08-01T12:00:00Z".to_string(),
        };
        let json = serde_json::to_string(&n).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
