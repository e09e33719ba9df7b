//! Unit tests for token claims

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::User;

#[test]
fn test_claims_for_user() {
    let user = User::new(42, 447700900123);
    let claims = Claims::for_user(&user, 60, JWT_ISSUER, JWT_AUDIENCE);

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.user_id().unwrap(), 42);
    assert_eq!(claims.phone, 447700900123);
    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(claims.nbf, claims.iat);
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
    assert!(claims.exp > chrono::Utc::now().timestamp());
}

#[test]
fn test_claims_have_unique_ids() {
    let user = User::new(1, 14155550100);
    let a = Claims::for_user(&user, 60, JWT_ISSUER, JWT_AUDIENCE);
    let b = Claims::for_user(&user, 60, JWT_ISSUER, JWT_AUDIENCE);
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_non_numeric_subject() {
    let user = User::new(1, 14155550100);
    let mut claims = Claims::for_user(&user, 60, JWT_ISSUER, JWT_AUDIENCE);
    claims.sub = "not-a-number".to_string();
    assert!(claims.user_id().is_err());
}
