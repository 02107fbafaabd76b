//! Minimal gated payloads for the dashboard and admin landing views.

use axum::extract::State;
use axum::{Extension, Json};
use serde_json::json;
use tickboard_core::{SeriesKind, Session};

use crate::state::AppState;

/// GET /api/dashboard/overview (protected)
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Json<serde_json::Value> {
    Json(json!({
        "session": session,
        "source": state.source.name(),
        "series_kinds": SeriesKind::ALL.len(),
    }))
}

/// GET /api/admin/overview (admin only)
pub async fn admin(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Json<serde_json::Value> {
    Json(json!({
        "session": session,
        "source": state.source.name(),
        "active_sessions": state.sessions.active_sessions(),
    }))
}
