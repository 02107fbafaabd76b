//! Route gating middleware.
//!
//! Evaluates the access gate against a fresh session snapshot before the
//! handler runs. The gate decision maps to a redirect, never an error; the
//! snapshot is stashed in request extensions for downstream handlers.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tickboard_core::{evaluate, NavDecision, RouteClass};

use crate::sessions::session_from_headers;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub async fn protect_dashboard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    gate_request(&state, RouteClass::Protected, request, next).await
}

pub async fn protect_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    gate_request(&state, RouteClass::Admin, request, next).await
}

async fn gate_request(
    state: &AppState,
    route: RouteClass,
    mut request: Request,
    next: Next,
) -> Response {
    let session = session_from_headers(&state.sessions, request.headers());

    match evaluate(&session, route) {
        NavDecision::Allow => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        NavDecision::RedirectToLogin => {
            tracing::debug!(route = route.as_str(), "gate redirect to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
        NavDecision::RedirectToDashboard => {
            tracing::debug!(route = route.as_str(), "gate redirect to dashboard");
            Redirect::to(DASHBOARD_PATH).into_response()
        }
    }
}
