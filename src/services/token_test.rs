use super::*;

fn keys() -> TokenKeys {
    TokenKeys::new(b"unit-test-secret", 3600)
}

// =============================================================================
// issue / verify round trip
// =============================================================================

#[test]
fn issue_then_verify_recovers_username() {
    let keys = keys();
    let token = keys.issue("alice").unwrap();
    assert_eq!(keys.verify(&token).unwrap(), "alice");
}

#[test]
fn issue_then_verify_preserves_unicode_username() {
    let keys = keys();
    let token = keys.issue("åsa-öberg").unwrap();
    assert_eq!(keys.verify(&token).unwrap(), "åsa-öberg");
}

#[test]
fn issued_token_has_three_jwt_segments() {
    let token = keys().issue("alice").unwrap();
    assert_eq!(token.split('.').count(), 3);
}

// =============================================================================
// verify fails closed
// =============================================================================

#[test]
fn verify_rejects_expired_token() {
    // TTL far enough in the past to clear the default leeway.
    let keys = TokenKeys::new(b"unit-test-secret", -3600);
    let token = keys.issue("alice").unwrap();
    assert!(matches!(keys.verify(&token), Err(TokenError::Invalid)));
}

#[test]
fn verify_rejects_wrong_secret() {
    let token = keys().issue("alice").unwrap();
    let other = TokenKeys::new(b"some-other-secret", 3600);
    assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
}

#[test]
fn verify_rejects_tampered_token() {
    let token = keys().issue("alice").unwrap();
    let mut tampered = token.clone();
    tampered.pop();
    tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
    assert!(matches!(keys().verify(&tampered), Err(TokenError::Invalid)));
}

#[test]
fn verify_rejects_garbage() {
    assert!(matches!(keys().verify("not-a-jwt"), Err(TokenError::Invalid)));
}

#[test]
fn verify_rejects_empty_string() {
    assert!(matches!(keys().verify(""), Err(TokenError::Invalid)));
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_missing_secret_returns_none() {
    unsafe { std::env::remove_var("JWT_SECRET_KEY") };
    assert!(TokenKeys::from_env().is_none());
}
