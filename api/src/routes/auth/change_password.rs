use actix_web::{web, HttpRequest, HttpResponse};
use lp_core::repositories::{RefreshTokenRepository, UserRepository};
use lp_shared::MessageResponse;
use validator::Validate;

use crate::app::AppState;
use crate::dto::ChangePasswordRequest;
use crate::handlers::messages;
use crate::handlers::{handle_domain_error, request_language, validation_error};
use crate::middleware::AuthContext;

/// Handler for PATCH /auth/change-password
///
/// Clears `must_change_password` on success.
///
/// ## Errors
/// - 400 Bad Request: New password shorter than 8 characters or equal to the old one
/// - 401 Unauthorized: Old password incorrect
pub async fn change_password<U, T>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<U, T>>,
    request: web::Json<ChangePasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let language = request_language(&req);
    if let Err(errors) = request.validate() {
        return validation_error(&errors, language);
    }

    match state
        .auth_service
        .change_password(auth.user.id, &request.old_password, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(messages::password_changed(language))),
        Err(error) => handle_domain_error(error, language),
    }
}
