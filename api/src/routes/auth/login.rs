use actix_web::{web, HttpRequest, HttpResponse};
use lp_core::repositories::{RefreshTokenRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::{handle_domain_error, request_language, validation_error};

/// Handler for POST /auth/login
///
/// # Request Body
///
/// ```json
/// { "email": "ana@example.com", "password": "string" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "expires_in": 900,
///     "refresh_expires_in": 604800,
///     "user": { "id": "...", "email": "ana@example.com", "role": "USER", ... }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed email
/// - 401 Unauthorized: Wrong credentials, deleted or disabled account
pub async fn login<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let language = request_language(&req);
    if let Err(errors) = request.validate() {
        return validation_error(&errors, language);
    }

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(error, language),
    }
}
