//! JWT authentication middleware for protecting API endpoints.
//!
//! The bearer access token is resolved to a live user through the
//! [`Authenticator`] registered as app data. The user is then stored in the
//! request extensions, where handlers pick it up with the [`AuthContext`]
//! extractor. Failures are answered here with the standard error body.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use lp_core::domain::entities::user::{Role, User};
use lp_core::errors::{AuthError, DomainError, DomainResult};
use lp_core::services::Authenticator;

use crate::handlers::{handle_domain_error, request_language};

/// The authenticated user of the current request
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth {
    /// Role the user must hold, any authenticated user when `None`
    required_role: Option<Role>,
}

impl JwtAuth {
    /// Any active user with a valid access token
    pub fn authenticated() -> Self {
        Self { required_role: None }
    }

    pub fn require_role(role: Role) -> Self {
        Self {
            required_role: Some(role),
        }
    }

    pub fn admin() -> Self {
        Self::require_role(Role::Admin)
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    required_role: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required_role = self.required_role;

        Box::pin(async move {
            let user = match authenticate_request(&req, required_role).await {
                Ok(user) => user,
                Err(error) => {
                    let response = handle_domain_error(error, request_language(req.request()));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext { user });

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

async fn authenticate_request(req: &ServiceRequest, required_role: Option<Role>) -> DomainResult<User> {
    let token = extract_bearer_token(req).ok_or(AuthError::InvalidToken)?;

    let authenticator = req
        .app_data::<web::Data<dyn Authenticator>>()
        .cloned()
        .ok_or_else(|| {
            log::error!("No authenticator registered as app data");
            DomainError::internal("authenticator not configured")
        })?;

    let user = authenticator.authenticate(&token).await?;
    if let Some(role) = required_role {
        authenticator.authorize(&user, &[role]).map_err(|e| {
            log::debug!("User {} lacks role {}", user.id, role);
            e
        })?;
    }
    Ok(user)
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Extractor for routes behind [`JwtAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            let response = handle_domain_error(AuthError::InvalidToken.into(), request_language(req));
            Error::from(InternalError::from_response("missing authentication context", response))
        });

        ready(result)
    }
}
