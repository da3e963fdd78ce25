use actix_web::{web, HttpRequest, HttpResponse};
use lp_core::repositories::{RefreshTokenRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{UpdateUserRequest, UserResponse};
use crate::handlers::{handle_domain_error, request_language, validation_error};
use crate::middleware::AuthContext;

/// Handler for GET /users/me
pub async fn get_me<U, T>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<U, T>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    match state.user_service.get_user_by_id(auth.user.id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error, request_language(&req)),
    }
}

/// Handler for PATCH /users/me
///
/// Users may change their email, name and phone. `role` and `is_active` in
/// the body are ignored.
pub async fn update_me<U, T>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<U, T>>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let language = request_language(&req);
    if let Err(errors) = request.validate() {
        return validation_error(&errors, language);
    }

    let patch = request.into_inner().into_self_patch();
    match state.user_service.update_user_profile(auth.user.id, patch).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error, language),
    }
}
