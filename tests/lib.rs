//! Shared helpers for tickboard behavior tests.

use std::sync::Arc;

use axum::Router;
use tickboard_core::Role;
use tickboard_web::config::Credential;
use tickboard_web::fetch::SampleSource;
use tickboard_web::routes::api_router;
use tickboard_web::sessions::SessionStore;
use tickboard_web::state::AppState;

pub const VIEWER_LOGIN: (&str, &str) = ("viewer", "viewer-pass");
pub const ADMIN_LOGIN: (&str, &str) = ("admin", "admin-pass");

/// App state backed by the deterministic sample source and two seeded
/// credentials.
pub fn test_state() -> AppState {
    let store = SessionStore::new(vec![
        Credential::parse("viewer:viewer-pass", Role::User),
        Credential::parse("admin:admin-pass", Role::Admin),
    ]);
    AppState::new(store, Arc::new(SampleSource::default()))
}

pub fn test_app(state: &AppState) -> Router {
    api_router(state.clone())
}

/// Mints a bearer token straight from the store.
pub fn login_token(state: &AppState, login: (&str, &str)) -> String {
    state
        .sessions
        .login(login.0, login.1)
        .map(|(token, _)| token)
        .expect("seeded credential should mint a session")
}
