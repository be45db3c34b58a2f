//! Web router using Axum

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use portal_core::{NotificationStore, SessionStore};
use portal_types::{Notification, SessionInfo};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::sse;

/// Cookie carrying the opaque session token
pub const SESSION_COOKIE: &str = "portal_session";

const DEFAULT_FETCH_LIMIT: usize = 10;
const MAX_FETCH_LIMIT: usize = 50;

/// Shared state for all API handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NotificationStore>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(store: Arc<NotificationStore>, sessions: Arc<SessionStore>) -> Self {
        Self { store, sessions }
    }
}

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/session", get(session_handler))
        .route(
            "/api/notifications",
            get(notifications_handler).post(create_notification_handler),
        )
        .route("/api/notifications/{id}/read", post(mark_read_handler))
        .route("/api/auth/signout", post(signout_handler))
        .route("/api/events", get(events_handler))
        .layer(cors)
        .with_state(state)
}

/// Token from the session cookie or an Authorization bearer header
fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    let cookies = headers.get(header::COOKIE).and_then(|v| v.to_str().ok())?;
    cookies.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|token| token.to_string())
    })
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Option<SessionInfo> {
    session_token(headers).and_then(|token| state.sessions.resolve(&token))
}

async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Grievance Portal - Build Required</title>
</head>
<body>
    <h1>Grievance Portal API</h1>
    <p>The Leptos WASM frontend needs to be compiled before the web UI can be displayed.</p>
    <ol>
        <li>Install Trunk: <code>cargo install trunk</code></li>
        <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
        <li>Serve frontend: <code>cd crates/portal-web && trunk serve</code></li>
    </ol>
    <p>API endpoints are live under <code>/api/*</code>.</p>
</body>
</html>"#,
    )
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "active_sessions": state.sessions.len(),
        "realtime_subscribers": state.store.event_bus().subscriber_count(),
    }))
}

/// Current identity, or null when the token is absent or stale.
///
/// Signed-out is a valid state, not an error - this never returns 401.
async fn session_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Option<SessionInfo>> {
    Json(authenticate(&state, &headers))
}

#[derive(Debug, Deserialize)]
struct FetchParams {
    limit: Option<usize>,
}

/// Unread notifications for the signed-in user, newest first
async fn notifications_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FetchParams>,
) -> Result<Json<Vec<Notification>>, StatusCode> {
    let session = authenticate(&state, &headers).ok_or(StatusCode::UNAUTHORIZED)?;
    let limit = params.limit.unwrap_or(DEFAULT_FETCH_LIMIT).min(MAX_FETCH_LIMIT);

    state
        .store
        .unread_for_user(session.user_id, limit)
        .map(Json)
        .map_err(|e| {
            warn!("Failed to fetch notifications: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[derive(Debug, Deserialize)]
struct CreateNotification {
    user_id: i64,
    message: String,
    grievance_id: i64,
}

/// Create a notification for a user (staff only); broadcast to SSE clients
async fn create_notification_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateNotification>,
) -> Result<(StatusCode, Json<Notification>), StatusCode> {
    let session = authenticate(&state, &headers).ok_or(StatusCode::UNAUTHORIZED)?;
    if !session.role.is_staff() {
        return Err(StatusCode::FORBIDDEN);
    }

    state
        .store
        .insert(body.user_id, &body.message, body.grievance_id)
        .map(|notification| (StatusCode::CREATED, Json(notification)))
        .map_err(|e| {
            warn!("Failed to create notification: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// Flip a notification to read, scoped to its owner
async fn mark_read_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> StatusCode {
    let Some(session) = authenticate(&state, &headers) else {
        return StatusCode::UNAUTHORIZED;
    };

    match state.store.mark_read(id, session.user_id) {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            warn!("Failed to mark notification {} read: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Revoke the session; idempotent, always expires the cookie
async fn signout_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        state.sessions.revoke(&token);
    }

    (
        StatusCode::NO_CONTENT,
        [(
            header::SET_COOKIE,
            "portal_session=; Path=/; Max-Age=0; HttpOnly",
        )],
    )
}

/// SSE endpoint pushing this user's new notifications
async fn events_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match authenticate(&state, &headers) {
        Some(session) => {
            sse::create_notification_stream(state.store.event_bus().clone(), session.user_id)
                .into_response()
        }
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; portal_session=abc123; lang=en"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_token_from_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer tok-42"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("tok-42"));
    }

    #[test]
    fn test_session_token_absent() {
        let headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        let mut other = HeaderMap::new();
        other.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_token(&other), None);
    }
}
