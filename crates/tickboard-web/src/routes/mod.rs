pub mod overview;
pub mod series;
pub mod session;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::gate_layer;
use crate::state::AppState;

/// Assemble the API router.
///
/// Public routes bypass the gate; dashboard and admin subtrees are wrapped
/// in the gating middleware for their route class.
pub fn api_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/login", post(session::login))
        .route("/api/logout", post(session::logout))
        .route("/api/session", get(session::current))
        .route("/api/series", get(series::list))
        .route("/api/series/:kind/columns", get(series::columns));

    let protected = Router::new()
        .route("/api/dashboard/overview", get(overview::dashboard))
        .route("/api/dashboard/series/:kind/table", get(series::table))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate_layer::protect_dashboard,
        ));

    let admin = Router::new()
        .route("/api/admin/overview", get(overview::admin))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate_layer::protect_admin,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(admin)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
