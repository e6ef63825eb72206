use super::*;
use test_fixtures::user_with_role;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_from_server_payload() {
    let json = r#"{
        "id": "7f2c8b4e-0000-4000-8000-000000000001",
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": null,
        "role": "moderator"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, "moderator");
    assert_eq!(user.display_name(), "Ada");
    assert_eq!(user.created_at, None);
}

#[test]
fn unknown_role_still_deserializes() {
    // The gate ranks the raw string; deserialization must not reject it.
    let mut user = user_with_role("superadmin");
    user.first_name = None;
    user.last_name = None;
    assert_eq!(user.role_label(), "superadmin");
    assert!(!user.has_role(domain::role::Role::User));
}

#[test]
fn has_role_respects_hierarchy() {
    assert!(user_with_role("admin").has_role(domain::role::Role::Moderator));
    assert!(!user_with_role("user").has_role(domain::role::Role::Moderator));
    assert!(user_with_role("moderator").has_role(domain::role::Role::Moderator));
}

// =============================================================
// TicketPatch serialization
// =============================================================

#[test]
fn empty_patch_serializes_to_empty_object() {
    let json = serde_json::to_string(&TicketPatch::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn unassign_serializes_to_explicit_null() {
    let patch = TicketPatch { assigned_to: Some(None), ..TicketPatch::default() };
    let json = serde_json::to_string(&patch).unwrap();
    assert_eq!(json, r#"{"assigned_to":null}"#);
}

#[test]
fn status_patch_uses_snake_case_names() {
    let patch = TicketPatch {
        status: Some(domain::ticket::TicketStatus::InProgress),
        ..TicketPatch::default()
    };
    let json = serde_json::to_string(&patch).unwrap();
    assert_eq!(json, r#"{"status":"in_progress"}"#);
}

// =============================================================
// Ticket / stats
// =============================================================

#[test]
fn ticket_round_trips_through_json() {
    let ticket = Ticket {
        id: Uuid::new_v4(),
        title: "Printer on fire".to_owned(),
        description: "Again.".to_owned(),
        status: domain::ticket::TicketStatus::Open,
        priority: domain::ticket::TicketPriority::Urgent,
        created_by: Uuid::new_v4(),
        assigned_to: None,
        requester: "Ada Lovelace".to_owned(),
        assignee: None,
        created_at: "2026-08-30 12:00".to_owned(),
        updated_at: "2026-08-30 12:00".to_owned(),
    };
    let json = serde_json::to_string(&ticket).unwrap();
    let restored: Ticket = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, ticket);
}

#[test]
fn stats_deserialize_from_server_shape() {
    let stats: TicketStats =
        serde_json::from_str(r#"{"open":2,"in_progress":1,"resolved":0,"closed":5,"total":8}"#).unwrap();
    assert_eq!(stats.open, 2);
    assert_eq!(stats.total, 8);
}
