//! Route-level access gate.
//!
//! Pure predicates over a session snapshot plus the navigation decision
//! table consumed by the routing layer. Evaluation has no side effects and
//! is safe to repeat on every navigation.

use serde::{Deserialize, Serialize};

use crate::domain::{Role, Session};

/// Authorization class a destination route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    Public,
    Protected,
    Admin,
}

impl RouteClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Admin => "admin",
        }
    }
}

/// Outcome of evaluating a navigation against the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// True iff the session may enter protected (authenticated-only) routes.
pub const fn can_enter_protected(session: &Session) -> bool {
    session.authenticated
}

/// True iff the session may enter admin routes.
pub const fn can_enter_admin(session: &Session) -> bool {
    session.authenticated && matches!(session.role, Some(Role::Admin))
}

/// Navigation decision table.
///
/// Unauthenticated requesters are redirected to login for both gated
/// classes; authenticated non-admins are bounced from admin routes to the
/// user dashboard.
pub const fn evaluate(session: &Session, route: RouteClass) -> NavDecision {
    match route {
        RouteClass::Public => NavDecision::Allow,
        RouteClass::Protected => {
            if can_enter_protected(session) {
                NavDecision::Allow
            } else {
                NavDecision::RedirectToLogin
            }
        }
        RouteClass::Admin => {
            if can_enter_admin(session) {
                NavDecision::Allow
            } else if can_enter_protected(session) {
                NavDecision::RedirectToDashboard
            } else {
                NavDecision::RedirectToLogin
            }
        }
    }
}
