//! Behavior-driven tests for the access gate.
//!
//! These tests verify HOW navigation requests are admitted or redirected
//! based on the session snapshot, including the fail-closed boundary.

use tickboard_core::{
    can_enter_admin, can_enter_protected, evaluate, session_or_anonymous, NavDecision,
    ProviderError, RouteClass, Session, SessionProvider,
};

// =============================================================================
// Access Gate: Predicates
// =============================================================================

#[test]
fn when_the_session_is_unauthenticated_both_predicates_deny() {
    // Given: An anonymous visitor
    let session = Session::anonymous();

    // Then: Neither gated class admits them
    assert!(!can_enter_protected(&session));
    assert!(!can_enter_admin(&session));
}

#[test]
fn when_the_session_is_an_authenticated_user_only_protected_admits() {
    let session = Session::user();

    assert!(can_enter_protected(&session));
    assert!(!can_enter_admin(&session));
}

#[test]
fn when_the_session_is_an_authenticated_admin_both_predicates_admit() {
    let session = Session::admin();

    assert!(can_enter_protected(&session));
    assert!(can_enter_admin(&session));
}

// =============================================================================
// Access Gate: Navigation decisions
// =============================================================================

#[test]
fn when_an_anonymous_visitor_navigates_anywhere_gated_they_go_to_login() {
    let session = Session::anonymous();

    assert_eq!(
        evaluate(&session, RouteClass::Protected),
        NavDecision::RedirectToLogin
    );
    assert_eq!(
        evaluate(&session, RouteClass::Admin),
        NavDecision::RedirectToLogin
    );
}

#[test]
fn when_a_user_navigates_to_an_admin_route_they_bounce_to_the_dashboard() {
    let session = Session::user();

    assert_eq!(evaluate(&session, RouteClass::Protected), NavDecision::Allow);
    assert_eq!(
        evaluate(&session, RouteClass::Admin),
        NavDecision::RedirectToDashboard
    );
}

#[test]
fn evaluation_is_idempotent_over_the_same_snapshot() {
    // Given: A fixed snapshot
    let session = Session::user();

    // When: The gate is evaluated repeatedly
    let decisions = (0..5)
        .map(|_| evaluate(&session, RouteClass::Admin))
        .collect::<Vec<_>>();

    // Then: Every evaluation yields the same decision and the snapshot is
    // untouched
    assert!(decisions
        .iter()
        .all(|d| *d == NavDecision::RedirectToDashboard));
    assert_eq!(session, Session::user());
}

// =============================================================================
// Access Gate: Fail-closed boundary
// =============================================================================

struct OutageProvider;

impl SessionProvider for OutageProvider {
    fn current_session(&self) -> Result<Session, ProviderError> {
        Err(ProviderError::Unavailable {
            message: String::from("identity backend timed out"),
        })
    }
}

#[test]
fn when_the_auth_provider_fails_the_requester_is_treated_as_anonymous() {
    // Given: A provider outage
    let session = session_or_anonymous(OutageProvider.current_session());

    // Then: The gate fails closed instead of propagating the failure
    assert_eq!(session, Session::anonymous());
    assert_eq!(
        evaluate(&session, RouteClass::Protected),
        NavDecision::RedirectToLogin
    );
    assert!(!OutageProvider.is_admin());
}
