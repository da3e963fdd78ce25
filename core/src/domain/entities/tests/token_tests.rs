//! Unit tests for token entities

use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, RevocationReason};
use crate::domain::entities::user::{Role, User};

#[test]
fn test_claims_for_user() {
    let mut user = User::new("admin@example.com", "Admin", "hash");
    user.role = Role::Admin;

    let claims = Claims::for_user(&user, None, 900);

    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.email, "admin@example.com");
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.exp - claims.iat, 900);
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert!(!claims.is_expired());
}

#[test]
fn test_access_claims_omit_jti() {
    let user = User::new("a@example.com", "A", "hash");
    let json = serde_json::to_value(Claims::for_user(&user, None, 60)).unwrap();
    assert!(json.get("jti").is_none());

    let json = serde_json::to_value(Claims::for_user(&user, Some("abc".into()), 60)).unwrap();
    assert_eq!(json["jti"], "abc");
}

#[test]
fn test_expired_claims() {
    let user = User::new("a@example.com", "A", "hash");
    let claims = Claims::for_user(&user, None, -10);
    assert!(claims.is_expired());
}

#[test]
fn test_refresh_token_revoke_is_one_way() {
    let mut token = RefreshToken::new("jti-1", "digest", Uuid::new_v4());
    assert!(!token.is_revoked);

    assert!(token.revoke(RevocationReason::Rotated));
    assert!(token.is_revoked);
    assert!(token.was_rotated());

    assert!(!token.revoke(RevocationReason::Logout));
    assert_eq!(token.revoked_reason, Some(RevocationReason::Rotated));
}

#[test]
fn test_logged_out_token_was_not_rotated() {
    let mut token = RefreshToken::new("jti-1", "digest", Uuid::new_v4());
    assert!(!token.was_rotated());

    token.revoke(RevocationReason::Logout);
    assert!(!token.was_rotated());
}

#[test]
fn test_revocation_reason_round_trips_through_column_text() {
    for reason in [
        RevocationReason::Logout,
        RevocationReason::Rotated,
        RevocationReason::ReuseDetected,
    ] {
        assert_eq!(reason.as_str().parse::<RevocationReason>().unwrap(), reason);
    }
    assert!("EXPIRED".parse::<RevocationReason>().is_err());
}
