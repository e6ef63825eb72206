use super::*;

#[test]
fn hash_then_verify_round_trip() {
    let phc = hash_password("correct horse battery staple").unwrap();
    assert!(phc.starts_with("$argon2id$"));
    assert!(verify_password("correct horse battery staple", &phc));
}

#[test]
fn wrong_password_fails_verification() {
    let phc = hash_password("secret-one").unwrap();
    assert!(!verify_password("secret-two", &phc));
}

#[test]
fn same_password_hashes_differently() {
    // Fresh salt per hash.
    let a = hash_password("secret").unwrap();
    let b = hash_password("secret").unwrap();
    assert_ne!(a, b);
}

#[test]
fn malformed_hash_verifies_false() {
    assert!(!verify_password("secret", "not-a-phc-string"));
    assert!(!verify_password("secret", ""));
}
