use super::*;

// =============================================================================
// Role parsing at the API boundary
// =============================================================================

#[test]
fn update_role_body_accepts_canonical_names() {
    let body: UpdateRoleBody = serde_json::from_str(r#"{"role":"moderator"}"#).unwrap();
    assert_eq!(Role::from_name(&body.role), Some(Role::Moderator));
}

#[test]
fn unknown_role_name_parses_to_none() {
    // The handler turns this into 400, never a silent default.
    let body: UpdateRoleBody = serde_json::from_str(r#"{"role":"superadmin"}"#).unwrap();
    assert_eq!(Role::from_name(&body.role), None);
}

#[test]
fn case_variant_role_name_parses_to_none() {
    let body: UpdateRoleBody = serde_json::from_str(r#"{"role":"Admin"}"#).unwrap();
    assert_eq!(Role::from_name(&body.role), None);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn user_list_item_includes_role_and_registration_date() {
    let item = UserListItem {
        id: Uuid::new_v4(),
        email: "mod@example.com".to_owned(),
        first_name: Some("Mo".to_owned()),
        last_name: None,
        role: Role::Moderator,
        created_at: "2026-08-01".to_owned(),
    };
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["role"], "moderator");
    assert_eq!(json["created_at"], "2026-08-01");
}
