use super::*;

// =============================================================================
// display_name — precedence: first+last > first > last > email prefix
// =============================================================================

#[test]
fn full_name_wins() {
    assert_eq!(display_name(Some("Ada"), Some("Lovelace"), "ada@example.com"), "Ada Lovelace");
}

#[test]
fn first_name_only() {
    assert_eq!(display_name(Some("Ada"), None, "ada@example.com"), "Ada");
}

#[test]
fn last_name_only() {
    assert_eq!(display_name(None, Some("Lovelace"), "ada@example.com"), "Lovelace");
}

#[test]
fn falls_back_to_email_prefix() {
    assert_eq!(display_name(None, None, "ada.l@example.com"), "ada.l");
}

#[test]
fn whitespace_names_are_absent() {
    assert_eq!(display_name(Some("  "), Some(""), "ada@example.com"), "ada");
}

#[test]
fn names_are_trimmed() {
    assert_eq!(display_name(Some(" Ada "), Some(" Lovelace"), "x@y"), "Ada Lovelace");
}

// =============================================================================
// email_local_part
// =============================================================================

#[test]
fn local_part_of_normal_address() {
    assert_eq!(email_local_part("support@example.com"), "support");
}

#[test]
fn empty_local_part_falls_back() {
    assert_eq!(email_local_part("@example.com"), "user");
    assert_eq!(email_local_part(""), "user");
}

#[test]
fn address_without_at_sign_is_used_whole() {
    assert_eq!(email_local_part("not-an-email"), "not-an-email");
}
