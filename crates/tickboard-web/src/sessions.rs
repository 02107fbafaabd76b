//! Session boundary adapter.
//!
//! Bridges bearer tokens to [`Session`] snapshots. Sessions are created at
//! login and destroyed at logout; everything in between is a read-only
//! lookup. Extraction is fail-closed end to end: a missing header, malformed
//! value, unknown token, or a poisoned store lock all resolve to the
//! anonymous session.

use std::collections::HashMap;
use std::sync::RwLock;

use axum::http::{header, HeaderMap};
use tickboard_core::{
    session_or_anonymous, ProviderError, Role, Session, SessionProvider,
};
use uuid::Uuid;

use crate::config::Credential;

/// In-memory token store owned by the auth boundary.
pub struct SessionStore {
    credentials: Vec<Credential>,
    tokens: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self {
            credentials,
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a session for a matching credential and returns its bearer
    /// token with the snapshot.
    pub fn login(&self, username: &str, password: &str) -> Option<(String, Session)> {
        let credential = self
            .credentials
            .iter()
            .find(|c| c.username == username && c.password == password)?;

        let session = match credential.role {
            Role::Admin => Session::admin(),
            Role::User => Session::user(),
        };

        let token = Uuid::new_v4().to_string();
        self.tokens.write().ok()?.insert(token.clone(), session);
        Some((token, session))
    }

    /// Destroys the session behind a token; returns whether one existed.
    pub fn logout(&self, token: &str) -> bool {
        match self.tokens.write() {
            Ok(mut tokens) => tokens.remove(token).is_some(),
            Err(_) => false,
        }
    }

    /// Provider-style lookup. Unknown tokens are anonymous; a poisoned lock
    /// surfaces as a provider error so callers on the gate path fail closed.
    pub fn resolve(&self, token: &str) -> Result<Session, ProviderError> {
        let tokens = self.tokens.read().map_err(|_| ProviderError::Unavailable {
            message: String::from("session store lock poisoned"),
        })?;
        Ok(tokens.get(token).copied().unwrap_or(Session::anonymous()))
    }

    pub fn active_sessions(&self) -> usize {
        self.tokens.read().map(|tokens| tokens.len()).unwrap_or(0)
    }
}

/// Snapshot provider bound to one request's bearer token.
pub struct TokenSessionProvider<'a> {
    store: &'a SessionStore,
    token: Option<String>,
}

impl SessionProvider for TokenSessionProvider<'_> {
    fn current_session(&self) -> Result<Session, ProviderError> {
        match &self.token {
            Some(token) => self.store.resolve(token),
            None => Ok(Session::anonymous()),
        }
    }
}

/// Extracts the session snapshot for a request, fail closed.
pub fn session_from_headers(store: &SessionStore, headers: &HeaderMap) -> Session {
    let provider = TokenSessionProvider {
        store,
        token: bearer_token(headers),
    };
    session_or_anonymous(provider.current_session())
}

pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn store() -> SessionStore {
        SessionStore::new(vec![
            Credential::parse("viewer:viewer", Role::User),
            Credential::parse("admin:admin", Role::Admin),
        ])
    }

    #[test]
    fn login_issues_token_and_snapshot() {
        let store = store();
        let (token, session) = store.login("admin", "admin").expect("valid credential");
        assert_eq!(session, Session::admin());
        assert_eq!(store.resolve(&token), Ok(Session::admin()));
    }

    #[test]
    fn wrong_password_issues_nothing() {
        let store = store();
        assert!(store.login("admin", "nope").is_none());
        assert_eq!(store.active_sessions(), 0);
    }

    #[test]
    fn logout_destroys_the_session() {
        let store = store();
        let (token, _) = store.login("viewer", "viewer").expect("valid credential");
        assert!(store.logout(&token));
        assert_eq!(store.resolve(&token), Ok(Session::anonymous()));
        assert!(!store.logout(&token));
    }

    #[test]
    fn malformed_authorization_header_is_anonymous() {
        let store = store();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Token abc123"),
        );
        assert_eq!(session_from_headers(&store, &headers), Session::anonymous());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(session_from_headers(&store, &headers), Session::anonymous());
    }

    #[test]
    fn unknown_token_is_anonymous() {
        let store = store();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer not-a-session"),
        );
        assert_eq!(session_from_headers(&store, &headers), Session::anonymous());
    }
}
