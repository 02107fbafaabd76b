//! Session lifecycle endpoints: login, logout, current snapshot.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tickboard_core::Session;

use crate::error::WebError;
use crate::sessions::{bearer_token, session_from_headers};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub session: Session,
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, WebError> {
    match state.sessions.login(&body.username, &body.password) {
        Some((token, session)) => {
            tracing::info!(username = %body.username, "session created");
            Ok(Json(LoginResponse { token, session }))
        }
        None => Err(WebError::Unauthorized),
    }
}

/// POST /api/logout — destroys the session behind the bearer token, if any.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    let revoked = bearer_token(&headers)
        .map(|token| state.sessions.logout(&token))
        .unwrap_or(false);
    Json(json!({ "revoked": revoked }))
}

/// GET /api/session — the current snapshot; anonymous when unauthenticated.
pub async fn current(State(state): State<AppState>, headers: HeaderMap) -> Json<Session> {
    Json(session_from_headers(&state.sessions, &headers))
}
