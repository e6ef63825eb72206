use super::*;

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn ranks_are_strictly_increasing() {
    assert!(Role::User.rank() < Role::Moderator.rank());
    assert!(Role::Moderator.rank() < Role::Admin.rank());
}

#[test]
fn rank_order_is_total() {
    // Antisymmetric and transitive over the whole table: every pair of
    // distinct roles compares strictly one way.
    for a in Role::ALL {
        for b in Role::ALL {
            if a == b {
                assert_eq!(a.rank(), b.rank());
            } else {
                assert_ne!(a.rank(), b.rank(), "{a} vs {b} must not tie");
                assert_eq!(a.rank() < b.rank(), !(b.rank() < a.rank()));
            }
        }
    }
    assert!(Role::User.rank() < Role::Admin.rank());
}

#[test]
fn ord_matches_rank_order() {
    assert!(Role::User < Role::Moderator);
    assert!(Role::Moderator < Role::Admin);
}

// =============================================================================
// satisfies
// =============================================================================

#[test]
fn role_satisfies_itself() {
    for role in Role::ALL {
        assert!(role.satisfies(role));
    }
}

#[test]
fn higher_rank_satisfies_lower_requirement() {
    assert!(Role::Admin.satisfies(Role::Moderator));
    assert!(Role::Admin.satisfies(Role::User));
    assert!(Role::Moderator.satisfies(Role::User));
}

#[test]
fn lower_rank_never_satisfies_higher_requirement() {
    assert!(!Role::User.satisfies(Role::Moderator));
    assert!(!Role::User.satisfies(Role::Admin));
    assert!(!Role::Moderator.satisfies(Role::Admin));
}

// =============================================================================
// Name parsing — exact lowercase only
// =============================================================================

#[test]
fn from_name_round_trips_canonical_names() {
    for role in Role::ALL {
        assert_eq!(Role::from_name(role.as_str()), Some(role));
    }
}

#[test]
fn from_name_rejects_case_variants() {
    assert_eq!(Role::from_name("Admin"), None);
    assert_eq!(Role::from_name("ADMIN"), None);
    assert_eq!(Role::from_name("Moderator"), None);
}

#[test]
fn from_name_rejects_unknown_and_empty() {
    assert_eq!(Role::from_name("superadmin"), None);
    assert_eq!(Role::from_name("mod"), None);
    assert_eq!(Role::from_name(""), None);
}

#[test]
fn rank_of_unknown_name_is_none() {
    assert_eq!(Role::rank_of("owner"), None);
    assert_eq!(Role::rank_of(" admin"), None);
}

#[test]
fn rank_of_known_names_match_enum_ranks() {
    assert_eq!(Role::rank_of("user"), Some(0));
    assert_eq!(Role::rank_of("moderator"), Some(1));
    assert_eq!(Role::rank_of("admin"), Some(2));
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_string(&Role::Moderator).unwrap(), "\"moderator\"");
}

#[test]
fn deserializes_exact_lowercase_only() {
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
}
