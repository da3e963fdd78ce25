//! Shared wiring for the HTTP integration tests
//!
//! The real services run over the in-memory repositories with a cheap
//! bcrypt cost.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::http::header;
use actix_web::test::TestRequest;
use actix_web::web;
use lp_api::AppState;
use lp_core::domain::entities::user::{Role, User};
use lp_core::repositories::{MockRefreshTokenRepository, MockUserRepository, Repository};
use lp_core::services::{
    AuthService, AuthServiceConfig, PasswordHasher, TokenService, TokenServiceConfig, UserService,
    UserServiceConfig,
};
use lp_shared::JwtConfig;
use serde_json::json;

pub const DEFAULT_PASSWORD: &str = "Welcome#2024";
pub const PASSWORD: &str = "correct horse battery";

pub type TestState = AppState<MockUserRepository, MockRefreshTokenRepository>;

pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub tokens: Arc<MockRefreshTokenRepository>,
    pub hasher: Arc<PasswordHasher>,
    pub state: web::Data<TestState>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let tokens = Arc::new(MockRefreshTokenRepository::new());
        let hasher = Arc::new(PasswordHasher::new(4));
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&JwtConfig::new(
            "integration-access-secret",
            "integration-refresh-secret",
        ))));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            token_service,
            Arc::clone(&hasher),
            AuthServiceConfig::default(),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&hasher),
            UserServiceConfig {
                default_password: Some(DEFAULT_PASSWORD.to_string()),
            },
        ));

        Self {
            users,
            tokens,
            hasher,
            state: web::Data::new(AppState::new(auth_service, user_service)),
        }
    }

    /// Store an active user whose password is [`PASSWORD`]
    pub async fn seed_user(&self, email: &str, name: &str, role: Role) -> User {
        let hash = self.hasher.hash(PASSWORD).await.unwrap();
        let mut user = User::new(email, name, hash);
        user.role = role;
        self.users.create(user).await.unwrap()
    }

    pub async fn stored_user(&self, user: &User) -> User {
        self.users.find_by_id(user.id).await.unwrap().unwrap()
    }
}

pub fn login_request(email: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn refresh_request(refresh_token: &str) -> TestRequest {
    TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refresh_token": refresh_token }))
}

pub fn bearer(access_token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", access_token))
}

pub fn portuguese() -> (header::HeaderName, &'static str) {
    (header::ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9")
}
