//! Integration tests for the /auth endpoints

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use lp_api::create_app;
use lp_core::domain::entities::user::{Role, UserPatch};
use lp_core::repositories::Repository;
use serde_json::{json, Value};

use common::{bearer, login_request, portuguese, refresh_request, TestContext, PASSWORD};

#[actix_web::test]
async fn test_login_success() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, login_request("ANA@Example.com", PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["access_token"].as_str().unwrap().len() > 20);
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["expires_in"], 900);
    assert_eq!(body["refresh_expires_in"], 604_800);
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["email"], "ana@example.com");
    assert_eq!(body["user"]["role"], "USER");
    assert_eq!(body["user"]["must_change_password"], false);
    assert!(body["user"].get("password_hash").is_none());

    assert_eq!(ctx.tokens.len().await, 1);
}

#[actix_web::test]
async fn test_wrong_password_looks_like_unknown_email() {
    let ctx = TestContext::new();
    ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, login_request("ana@example.com", "wrong password").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = test::read_body_json(resp).await;

    let resp = test::call_service(&app, login_request("nobody@example.com", PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: Value = test::read_body_json(resp).await;

    assert_eq!(wrong_password["error"], "INVALID_CREDENTIALS");
    assert_eq!(wrong_password["error"], unknown_email["error"]);
    assert_eq!(wrong_password["message"], unknown_email["message"]);
    assert!(ctx.tokens.is_empty().await);
}

#[actix_web::test]
async fn test_login_rejects_malformed_email() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, login_request("not-an-email", PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["fields"]["email"].is_array());
}

#[actix_web::test]
async fn test_deleted_and_disabled_users_cannot_login() {
    let ctx = TestContext::new();
    let deleted = ctx.seed_user("gone@example.com", "Gone", Role::User).await;
    let disabled = ctx.seed_user("off@example.com", "Off", Role::User).await;
    ctx.state.user_service.delete_user(deleted.id).await.unwrap();
    ctx.users
        .update(
            disabled.id,
            UserPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = login_request("gone@example.com", PASSWORD).insert_header(portuguese()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_DELETED");
    assert_eq!(
        body["message"],
        "Sua conta foi excluída. Por favor, entre em contato com o suporte."
    );

    let resp = test::call_service(&app, login_request("off@example.com", PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_DISABLED");
    assert_eq!(body["message"], "Your account is disabled. Please contact support.");
}

#[actix_web::test]
async fn test_refresh_rotates_tokens() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let login: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let first = login["refresh_token"].as_str().unwrap().to_string();

    let resp = test::call_service(&app, refresh_request(&first).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let refreshed: Value = test::read_body_json(resp).await;
    let second = refreshed["refresh_token"].as_str().unwrap();

    assert_ne!(first, second);
    assert_eq!(refreshed["user"]["id"], user.id.to_string());

    let records = ctx.tokens.snapshot().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records.iter().filter(|record| record.is_revoked).count(), 1);
}

#[actix_web::test]
async fn test_refresh_token_reuse_revokes_the_family() {
    let ctx = TestContext::new();
    ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let login: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let first = login["refresh_token"].as_str().unwrap().to_string();

    let refreshed: Value = test::call_and_read_body_json(&app, refresh_request(&first).to_request()).await;
    let second = refreshed["refresh_token"].as_str().unwrap().to_string();

    let resp = test::call_service(&app, refresh_request(&first).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCESS_DENIED");

    let resp = test::call_service(&app, refresh_request(&second).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    assert!(ctx.tokens.snapshot().await.iter().all(|record| record.is_revoked));
}

#[actix_web::test]
async fn test_refresh_after_logout_leaves_other_devices_signed_in() {
    let ctx = TestContext::new();
    ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let laptop: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let phone: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let laptop_refresh = laptop["refresh_token"].as_str().unwrap();
    let phone_refresh = phone["refresh_token"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .set_json(json!({ "refresh_token": laptop_refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, refresh_request(laptop_refresh).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(&app, refresh_request(phone_refresh).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_refresh_rejects_access_token() {
    let ctx = TestContext::new();
    ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let login: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let access = login["access_token"].as_str().unwrap();

    let resp = test::call_service(&app, refresh_request(access).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_refresh_for_deleted_user() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let login: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let refresh = login["refresh_token"].as_str().unwrap();
    ctx.state.user_service.delete_user(user.id).await.unwrap();

    let resp = test::call_service(&app, refresh_request(refresh).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_DELETED");
}

#[actix_web::test]
async fn test_logout_revokes_refresh_token() {
    let ctx = TestContext::new();
    ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let login: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let refresh = login["refresh_token"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .insert_header(portuguese())
        .set_json(json!({ "refresh_token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logout realizado com sucesso.");

    // A second logout with the same token is still a success
    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .set_json(json!({ "refresh_token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, refresh_request(refresh).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_logout_with_invalid_token() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .set_json(json!({ "refresh_token": "definitely.not.a-jwt" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_change_password_flow() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    ctx.users
        .update(user.id, UserPatch::password(user.password_hash.clone(), true))
        .await
        .unwrap();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let login: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    assert_eq!(login["user"]["must_change_password"], true);
    let access = login["access_token"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri("/auth/change-password")
        .insert_header(bearer(access))
        .set_json(json!({ "old_password": PASSWORD, "new_password": "a brand new secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password changed successfully.");

    assert!(!ctx.stored_user(&user).await.must_change_password);

    let resp = test::call_service(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        login_request("ana@example.com", "a brand new secret").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_change_password_rejections() {
    let ctx = TestContext::new();
    ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let login: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let access = login["access_token"].as_str().unwrap();

    let cases = [
        (PASSWORD, "short", StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        (PASSWORD, PASSWORD, StatusCode::BAD_REQUEST, "PASSWORD_SAME_AS_OLD"),
        ("not my password", "another long one", StatusCode::UNAUTHORIZED, "OLD_PASSWORD_INCORRECT"),
    ];

    for (old_password, new_password, status, code) in cases {
        let req = test::TestRequest::patch()
            .uri("/auth/change-password")
            .insert_header(bearer(access))
            .set_json(json!({ "old_password": old_password, "new_password": new_password }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), status, "{}", code);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], code);
    }
}

#[actix_web::test]
async fn test_change_password_requires_token() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::patch()
        .uri("/auth/change-password")
        .set_json(json!({ "old_password": PASSWORD, "new_password": "a brand new secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_TOKEN");
}

#[actix_web::test]
async fn test_short_password_message_in_portuguese() {
    let ctx = TestContext::new();
    ctx.seed_user("ana@example.com", "Ana", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let login: Value =
        test::call_and_read_body_json(&app, login_request("ana@example.com", PASSWORD).to_request()).await;
    let access = login["access_token"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri("/auth/change-password")
        .insert_header(bearer(access))
        .insert_header(portuguese())
        .set_json(json!({ "old_password": PASSWORD, "new_password": "curta" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "A nova senha deve ter no mínimo 8 caracteres.");
}
