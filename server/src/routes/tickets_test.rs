use super::*;

// =============================================================================
// Error-to-status mapping
// =============================================================================

#[test]
fn ticket_errors_map_to_expected_statuses() {
    assert_eq!(
        ticket_error_to_status(&ticket::TicketError::NotFound(Uuid::new_v4())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        ticket_error_to_status(&ticket::TicketError::Forbidden("nope")),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        ticket_error_to_status(&ticket::TicketError::Invalid("bad title")),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ticket_error_to_status(&ticket::TicketError::InvalidField { field: "status", value: "x".to_owned() }),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// Body deserialization — assigned_to tri-state
// =============================================================================

#[test]
fn missing_assigned_to_means_leave_alone() {
    let body: UpdateTicketBody = serde_json::from_str(r#"{"status":"resolved"}"#).unwrap();
    assert_eq!(body.assigned_to, None);
    assert_eq!(body.status, Some(TicketStatus::Resolved));
}

#[test]
fn null_assigned_to_means_unassign() {
    let body: UpdateTicketBody = serde_json::from_str(r#"{"assigned_to":null}"#).unwrap();
    assert_eq!(body.assigned_to, Some(None));
}

#[test]
fn explicit_assigned_to_sets_the_assignee() {
    let id = Uuid::new_v4();
    let body: UpdateTicketBody = serde_json::from_str(&format!(r#"{{"assigned_to":"{id}"}}"#)).unwrap();
    assert_eq!(body.assigned_to, Some(Some(id)));
}

#[test]
fn create_body_defaults_description_to_empty() {
    let body: CreateTicketBody = serde_json::from_str(r#"{"title":"Broken printer"}"#).unwrap();
    assert_eq!(body.description, "");
    assert_eq!(body.priority, None);
}

#[test]
fn create_body_rejects_unknown_priority() {
    let result = serde_json::from_str::<CreateTicketBody>(r#"{"title":"x","priority":"critical"}"#);
    assert!(result.is_err());
}
