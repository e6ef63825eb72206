use super::*;
use crate::net::types::test_fixtures::user_with_role;

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_starts_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn resolve_with_current_epoch_applies() {
    let mut state = AuthState::default();
    let epoch = state.begin_fetch();
    state.resolve(epoch, Some(user_with_role("user")));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn resolve_anonymous_clears_loading() {
    let mut state = AuthState::default();
    let epoch = state.begin_fetch();
    state.resolve(epoch, None);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn stale_resolution_is_dropped() {
    let mut state = AuthState::default();
    let stale = state.begin_fetch();
    let fresh = state.begin_fetch();

    // The newer fetch resolves first...
    state.resolve(fresh, Some(user_with_role("admin")));
    // ...then the stale one arrives late with an outdated answer.
    state.resolve(stale, None);

    assert!(state.is_authenticated(), "late stale response must not clobber newer state");
}

#[test]
fn set_user_invalidates_in_flight_fetch() {
    let mut state = AuthState::default();
    let in_flight = state.begin_fetch();

    // Login completes through its own path while the fetch is pending.
    state.set_user(Some(user_with_role("moderator")));
    state.resolve(in_flight, None);

    assert!(state.is_authenticated(), "login outcome must survive a stale fetch resolution");
}

#[test]
fn set_user_none_logs_out() {
    let mut state = AuthState::default();
    state.set_user(Some(user_with_role("user")));
    assert!(state.is_authenticated());

    state.set_user(None);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn begin_fetch_epochs_are_monotonic() {
    let mut state = AuthState::default();
    let a = state.begin_fetch();
    let b = state.begin_fetch();
    let c = state.begin_fetch();
    assert!(a < b && b < c);
}
