use actix_web::{web, HttpRequest, HttpResponse};
use lp_core::repositories::{RefreshTokenRepository, UserRepository};
use lp_shared::MessageResponse;
use validator::Validate;

use crate::app::AppState;
use crate::dto::LogoutRequest;
use crate::handlers::messages;
use crate::handlers::{handle_domain_error, request_language, validation_error};

/// Handler for POST /auth/logout
///
/// Revokes the record of the given refresh token. Tokens that are already
/// revoked or were never recorded still log out successfully; tokens that
/// fail verification get 403.
pub async fn logout<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let language = request_language(&req);
    if let Err(errors) = request.validate() {
        return validation_error(&errors, language);
    }

    match state.auth_service.logout(&request.refresh_token).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(messages::logged_out(language))),
        Err(error) => handle_domain_error(error, language),
    }
}
