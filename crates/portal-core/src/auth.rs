//! In-memory session registry
//!
//! The portal does not issue credentials itself; an embedding auth provider
//! calls `issue` after it has verified a user, and handlers resolve the
//! opaque token on every request. DashMap keeps resolution lock-free on the
//! hot path.

use dashmap::DashMap;
use portal_types::SessionInfo;
use tracing::debug;
use uuid::Uuid;

/// Token-keyed registry of active sessions
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionInfo>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session and return its opaque token
    pub fn issue(&self, info: SessionInfo) -> String {
        let token = Uuid::new_v4().to_string();
        debug!(user_id = info.user_id, "session issued");
        self.sessions.insert(token.clone(), info);
        token
    }

    /// Resolve a token to its identity, if the session is still active
    pub fn resolve(&self, token: &str) -> Option<SessionInfo> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    /// Revoke a session; idempotent, returns whether a session was removed
    pub fn revoke(&self, token: &str) -> bool {
        let removed = self.sessions.remove(token).is_some();
        if removed {
            debug!("session revoked");
        }
        removed
    }

    /// Number of active sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_types::Role;

    fn employee() -> SessionInfo {
        SessionInfo {
            user_id: 7,
            display_name: "Dana".to_string(),
            role: Role::Employee,
        }
    }

    #[test]
    fn test_issue_and_resolve() {
        let store = SessionStore::new();
        let token = store.issue(employee());

        let resolved = store.resolve(&token).unwrap();
        assert_eq!(resolved.user_id, 7);
        assert_eq!(resolved.role, Role::Employee);
        assert!(store.resolve("not-a-token").is_none());
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let store = SessionStore::new();
        let token = store.issue(employee());

        assert!(store.revoke(&token));
        assert!(!store.revoke(&token));
        assert!(store.resolve(&token).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = SessionStore::new();
        let a = store.issue(employee());
        let b = store.issue(employee());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
