use super::*;

#[test]
fn per_key_allows_up_to_limit() {
    let rl = RateLimiter::new();
    let now = Instant::now();

    for i in 0..DEFAULT_PER_KEY_LIMIT {
        assert!(rl.check_and_record_at("a@example.com", now).is_ok(), "attempt {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("a@example.com", now),
        Err(RateLimitError::PerKeyExceeded)
    ));
}

#[test]
fn global_allows_up_to_limit() {
    let rl = RateLimiter::new();
    let now = Instant::now();

    // Use distinct keys to avoid hitting the per-key limit first.
    for i in 0..DEFAULT_GLOBAL_LIMIT {
        let key = format!("user{i}@example.com");
        assert!(rl.check_and_record_at(&key, now).is_ok(), "attempt {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("late@example.com", now),
        Err(RateLimitError::GlobalExceeded)
    ));
}

#[test]
fn window_expiry_allows_new_attempts() {
    let rl = RateLimiter::new();
    let start = Instant::now();

    for _ in 0..DEFAULT_PER_KEY_LIMIT {
        rl.check_and_record_at("a@example.com", start).unwrap();
    }
    assert!(rl.check_and_record_at("a@example.com", start).is_err());

    let after_window = start + Duration::from_secs(DEFAULT_PER_KEY_WINDOW_SECS) + Duration::from_millis(1);
    assert!(rl.check_and_record_at("a@example.com", after_window).is_ok());
}

#[test]
fn distinct_keys_do_not_interfere() {
    let rl = RateLimiter::new();
    let now = Instant::now();

    for _ in 0..DEFAULT_PER_KEY_LIMIT {
        rl.check_and_record_at("a@example.com", now).unwrap();
    }
    assert!(rl.check_and_record_at("a@example.com", now).is_err());
    assert!(rl.check_and_record_at("b@example.com", now).is_ok());
}

#[test]
fn reset_clears_per_key_state() {
    let rl = RateLimiter::new();
    let now = Instant::now();

    for _ in 0..DEFAULT_PER_KEY_LIMIT {
        rl.check_and_record_at("a@example.com", now).unwrap();
    }
    assert!(rl.check_and_record_at("a@example.com", now).is_err());

    rl.reset("a@example.com");
    assert!(rl.check_and_record_at("a@example.com", now).is_ok());
}
