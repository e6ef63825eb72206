use domain::role::Role;

use super::{decide, GateDecision, DEFAULT_LOGIN_PATH, PERMISSION_DENIED_PATH};
use crate::net::types::test_fixtures::user_with_role;
use crate::state::auth::AuthState;

fn loading_state() -> AuthState {
    AuthState::default()
}

fn anonymous_state() -> AuthState {
    let mut auth = AuthState::default();
    auth.set_user(None);
    auth
}

fn signed_in(role: &str) -> AuthState {
    let mut auth = AuthState::default();
    auth.set_user(Some(user_with_role(role)));
    auth
}

#[test]
fn loading_session_is_pending_regardless_of_requirements() {
    let auth = loading_state();
    for required in [None, Some(Role::User), Some(Role::Moderator), Some(Role::Admin)] {
        assert_eq!(
            decide(&auth, true, required, DEFAULT_LOGIN_PATH),
            GateDecision::Pending
        );
    }
    assert_eq!(
        decide(&auth, false, None, DEFAULT_LOGIN_PATH),
        GateDecision::Pending
    );
}

#[test]
fn anonymous_user_is_sent_to_login() {
    let auth = anonymous_state();
    for required in [None, Some(Role::User), Some(Role::Moderator), Some(Role::Admin)] {
        assert_eq!(
            decide(&auth, true, required, DEFAULT_LOGIN_PATH),
            GateDecision::Redirect(DEFAULT_LOGIN_PATH.to_owned())
        );
    }
}

#[test]
fn anonymous_user_keeps_custom_redirect_target() {
    let auth = anonymous_state();
    assert_eq!(
        decide(&auth, true, None, "/signup"),
        GateDecision::Redirect("/signup".to_owned())
    );
}

#[test]
fn public_route_allows_anonymous() {
    let auth = anonymous_state();
    assert_eq!(
        decide(&auth, false, None, DEFAULT_LOGIN_PATH),
        GateDecision::Allow
    );
}

#[test]
fn role_gated_public_route_fails_closed_for_anonymous() {
    let auth = anonymous_state();
    for required in [Role::User, Role::Moderator, Role::Admin] {
        assert_eq!(
            decide(&auth, false, Some(required), DEFAULT_LOGIN_PATH),
            GateDecision::Redirect(PERMISSION_DENIED_PATH.to_owned()),
            "{required}"
        );
    }
}

#[test]
fn signed_in_user_without_role_requirement_is_allowed() {
    let auth = signed_in("user");
    assert_eq!(
        decide(&auth, true, None, DEFAULT_LOGIN_PATH),
        GateDecision::Allow
    );
}

#[test]
fn role_requirement_respects_hierarchy() {
    let cases = [
        ("user", Role::User, true),
        ("user", Role::Moderator, false),
        ("user", Role::Admin, false),
        ("moderator", Role::User, true),
        ("moderator", Role::Moderator, true),
        ("moderator", Role::Admin, false),
        ("admin", Role::User, true),
        ("admin", Role::Moderator, true),
        ("admin", Role::Admin, true),
    ];
    for (held, required, allowed) in cases {
        let auth = signed_in(held);
        let decision = decide(&auth, true, Some(required), DEFAULT_LOGIN_PATH);
        if allowed {
            assert_eq!(decision, GateDecision::Allow, "{held} vs {required}");
        } else {
            assert_eq!(
                decision,
                GateDecision::Redirect(PERMISSION_DENIED_PATH.to_owned()),
                "{held} vs {required}"
            );
        }
    }
}

#[test]
fn unknown_role_never_satisfies_a_requirement() {
    for held in ["superadmin", "Admin", "ADMIN", "", "owner"] {
        let auth = signed_in(held);
        assert_eq!(
            decide(&auth, true, Some(Role::User), DEFAULT_LOGIN_PATH),
            GateDecision::Redirect(PERMISSION_DENIED_PATH.to_owned()),
            "{held}"
        );
    }
}

#[test]
fn unknown_role_still_passes_plain_auth_check() {
    let auth = signed_in("superadmin");
    assert_eq!(
        decide(&auth, true, None, DEFAULT_LOGIN_PATH),
        GateDecision::Allow
    );
}
