//! Unit tests for the user entity

use crate::domain::entities::user::User;

#[test]
fn test_new_user_has_no_pending_verification() {
    let user = User::new(1, 447700900123);

    assert_eq!(user.id, 1);
    assert_eq!(user.phone, 447700900123);
    assert!(user.verification_id.is_none());
    assert!(user.code.is_none());
}

#[test]
fn test_start_verification_replaces_challenge() {
    let mut user = User::new(1, 447700900123);

    user.start_verification("req-1");
    assert_eq!(user.verification_id.as_deref(), Some("req-1"));

    user.start_verification("req-2");
    assert_eq!(user.verification_id.as_deref(), Some("req-2"));
}

#[test]
fn test_complete_verification_clears_challenge_and_stores_code() {
    let mut user = User::new(7, 14155550100);
    user.start_verification("req-1");
    let before = user.updated_at;

    user.complete_verification("1234");

    assert!(user.verification_id.is_none());
    assert_eq!(user.code.as_deref(), Some("1234"));
    assert!(user.updated_at >= before);
}
