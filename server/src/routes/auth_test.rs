use super::*;

fn auth_user(role: Role) -> AuthUser {
    AuthUser {
        user: session::SessionUser {
            id: Uuid::new_v4(),
            email: "x@example.com".to_owned(),
            first_name: None,
            last_name: None,
            role,
        },
        token: "test-token".to_owned(),
    }
}

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_4417__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_17__"), None);
}

// =============================================================================
// require_role
// =============================================================================

#[test]
fn require_role_allows_equal_rank() {
    assert!(require_role(&auth_user(Role::Moderator), Role::Moderator).is_ok());
}

#[test]
fn require_role_allows_higher_rank() {
    assert!(require_role(&auth_user(Role::Admin), Role::Moderator).is_ok());
    assert!(require_role(&auth_user(Role::Admin), Role::User).is_ok());
}

#[test]
fn require_role_rejects_lower_rank() {
    assert_eq!(require_role(&auth_user(Role::User), Role::Moderator), Err(StatusCode::FORBIDDEN));
    assert_eq!(require_role(&auth_user(Role::Moderator), Role::Admin), Err(StatusCode::FORBIDDEN));
}

// =============================================================================
// Error-to-status mapping
// =============================================================================

#[test]
fn account_errors_map_to_expected_statuses() {
    assert_eq!(account_error_to_status(&account::AccountError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(
        account_error_to_status(&account::AccountError::WeakPassword(8)),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(account_error_to_status(&account::AccountError::EmailTaken), StatusCode::CONFLICT);
    assert_eq!(
        account_error_to_status(&account::AccountError::InvalidCredentials),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        account_error_to_status(&account::AccountError::NotFound(Uuid::new_v4())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        account_error_to_status(&account::AccountError::UnknownRole("x".to_owned())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax() {
    let cookie = session_cookie("tok".to_owned());
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// UserResponse
// =============================================================================

#[test]
fn user_response_serializes_role_as_lowercase_string() {
    let response = UserResponse::from(auth_user(Role::Moderator).user);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["role"], "moderator");
    assert_eq!(json["email"], "x@example.com");
}
