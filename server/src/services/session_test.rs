use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_display_name_prefers_full_name() {
    let user = SessionUser {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        role: Role::User,
    };
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn session_user_display_name_falls_back_to_email_prefix() {
    let user = SessionUser {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_owned(),
        first_name: None,
        last_name: None,
        role: Role::Moderator,
    };
    assert_eq!(user.display_name(), "ada");
}

#[test]
fn session_user_serializes_role_as_lowercase() {
    let user = SessionUser {
        id: Uuid::new_v4(),
        email: "x@y.z".to_owned(),
        first_name: None,
        last_name: None,
        role: Role::Admin,
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["role"], "admin");
}
