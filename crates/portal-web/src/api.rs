//! API client utilities for the frontend
//!
//! Every call returns Result<_, String>; callers log failures and keep the
//! last known good display state. Nothing here retries or surfaces errors to
//! the user.

use gloo_net::http::Request;
use portal_types::{Notification, SessionInfo};

/// Bounded initial fetch: the dropdown only ever shows the 10 most recent
pub const UNREAD_FETCH_LIMIT: usize = 10;

/// Resolve the current session, if any
///
/// A missing session is a valid state (signed out), not an error.
pub async fn fetch_session() -> Result<Option<SessionInfo>, String> {
    let response = Request::get("/api/session")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Option<SessionInfo>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the unread notifications for the signed-in user, newest first
pub async fn fetch_unread_notifications() -> Result<Vec<Notification>, String> {
    let url = format!("/api/notifications?limit={}", UNREAD_FETCH_LIMIT);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Notification>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Mark a single notification as read
pub async fn mark_notification_read(id: i64) -> Result<(), String> {
    let url = format!("/api/notifications/{}/read", id);
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

/// Invalidate the current session
pub async fn sign_out() -> Result<(), String> {
    let response = Request::post("/api/auth/signout")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
