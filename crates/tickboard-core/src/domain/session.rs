use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ProviderError, ValidationError};

/// Role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(ValidationError::InvalidRole {
                value: other.to_owned(),
            }),
        }
    }
}

/// Read-only snapshot of the requester's authentication state.
///
/// Owned by the auth boundary: created at login, destroyed at logout. The
/// gate only reads it and re-evaluates a fresh snapshot on every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Session {
    pub const fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: None,
        }
    }

    pub const fn user() -> Self {
        Self {
            authenticated: true,
            role: Some(Role::User),
        }
    }

    pub const fn admin() -> Self {
        Self {
            authenticated: true,
            role: Some(Role::Admin),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Boundary contract for the external auth provider.
///
/// Implementations produce a session snapshot per navigation; they never
/// mutate it on behalf of the gate.
pub trait SessionProvider {
    fn current_session(&self) -> Result<Session, ProviderError>;

    fn is_admin(&self) -> bool {
        crate::gate::can_enter_admin(&session_or_anonymous(self.current_session()))
    }
}

/// Fail-closed conversion: a provider failure is treated as an anonymous
/// session rather than surfaced to gate callers.
pub fn session_or_anonymous(result: Result<Session, ProviderError>) -> Session {
    result.unwrap_or(Session::anonymous())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    impl SessionProvider for FailingProvider {
        fn current_session(&self) -> Result<Session, ProviderError> {
            Err(ProviderError::Unavailable {
                message: String::from("backend offline"),
            })
        }
    }

    #[test]
    fn provider_failure_resolves_to_anonymous() {
        let session = session_or_anonymous(FailingProvider.current_session());
        assert_eq!(session, Session::anonymous());
        assert!(!FailingProvider.is_admin());
    }

    #[test]
    fn parses_role() {
        let role = Role::from_str(" Admin ").expect("must parse");
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = Role::from_str("owner").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidRole { .. }));
    }
}
