use actix_web::{web, HttpRequest, HttpResponse};
use lp_core::repositories::{RefreshTokenRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::RefreshTokenRequest;
use crate::handlers::{handle_domain_error, request_language, validation_error};

/// Handler for POST /auth/refresh
///
/// Exchanges a refresh token for a new pair. The presented token is revoked
/// and cannot be used again.
///
/// ## Errors
/// - 401 Unauthorized: The owner was removed, deleted or disabled
/// - 403 Forbidden: Invalid, expired, revoked or reused refresh token
pub async fn refresh_token<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let language = request_language(&req);
    if let Err(errors) = request.validate() {
        return validation_error(&errors, language);
    }

    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(error, language),
    }
}
