use super::*;

// =============================================================================
// TicketStatus
// =============================================================================

#[test]
fn status_names_round_trip() {
    for status in TicketStatus::ALL {
        assert_eq!(TicketStatus::from_name(status.as_str()), Some(status));
    }
}

#[test]
fn status_rejects_unknown_names() {
    assert_eq!(TicketStatus::from_name("Open"), None);
    assert_eq!(TicketStatus::from_name("in progress"), None);
    assert_eq!(TicketStatus::from_name(""), None);
}

#[test]
fn status_serde_uses_snake_case() {
    assert_eq!(serde_json::to_string(&TicketStatus::InProgress).unwrap(), "\"in_progress\"");
    let status: TicketStatus = serde_json::from_str("\"resolved\"").unwrap();
    assert_eq!(status, TicketStatus::Resolved);
}

// =============================================================================
// TicketPriority
// =============================================================================

#[test]
fn priority_names_round_trip() {
    for priority in TicketPriority::ALL {
        assert_eq!(TicketPriority::from_name(priority.as_str()), Some(priority));
    }
}

#[test]
fn priority_order_is_ascending() {
    assert!(TicketPriority::Low < TicketPriority::Medium);
    assert!(TicketPriority::Medium < TicketPriority::High);
    assert!(TicketPriority::High < TicketPriority::Urgent);
}

#[test]
fn priority_rejects_unknown_names() {
    assert_eq!(TicketPriority::from_name("critical"), None);
    assert_eq!(TicketPriority::from_name("URGENT"), None);
}
