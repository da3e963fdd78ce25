//! Administrator user management

use actix_web::{web, HttpRequest, HttpResponse};
use lp_core::repositories::{RefreshTokenRepository, UserRepository};
use lp_shared::MessageResponse;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CreateUserRequest, PaginationQuery, UpdateUserRequest, UserResponse};
use crate::handlers::messages;
use crate::handlers::{bad_request, handle_domain_error, request_language, validation_error};

/// Handler for POST /users
///
/// The new user gets the configured default password and must change it on
/// first login.
///
/// ## Errors
/// - 400 Bad Request: Invalid body or email already in use
/// - 500 Internal Server Error: `DEFAULT_PASSWORD` is not configured
pub async fn create_user<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let language = request_language(&req);
    if let Err(errors) = request.validate() {
        return validation_error(&errors, language);
    }

    match state.user_service.create_user(request.into_inner().into()).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error, language),
    }
}

/// Handler for GET /users
pub async fn list_users<U, T>(req: HttpRequest, state: web::Data<AppState<U, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    match state.user_service.get_all_users().await {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(users)
        }
        Err(error) => handle_domain_error(error, request_language(&req)),
    }
}

/// Handler for GET /users/paginated
///
/// # Query
///
/// `page` (default 1), `limit` (1 to 100, default 10), `search` on name or
/// email, `sort_by` (default `id`) and `sort_order` (`ASC` or `DESC`).
///
/// # Response
///
/// ```json
/// {
///     "data": [ { "id": "...", "email": "...", ... } ],
///     "meta": {
///         "total_items": 42,
///         "item_count": 10,
///         "items_per_page": 10,
///         "total_pages": 5,
///         "current_page": 1
///     }
/// }
/// ```
pub async fn list_users_paginated<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    query: web::Query<PaginationQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let language = request_language(&req);
    if let Err(errors) = query.validate() {
        return validation_error(&errors, language);
    }

    let query = match query.into_inner().into_user_query() {
        Ok(query) => query,
        Err(reason) => return bad_request(reason, language),
    };

    match state.user_service.get_users_paginated(query).await {
        Ok(page) => HttpResponse::Ok().json(page.map(UserResponse::from)),
        Err(error) => handle_domain_error(error, language),
    }
}

/// Handler for GET /users/{id}
pub async fn get_user<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    match state.user_service.get_user_by_id(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error, request_language(&req)),
    }
}

/// Handler for PATCH /users/{id}
pub async fn update_user<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    path: web::Path<Uuid>,
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

    let patch = request.into_inner().into_patch();
    match state.user_service.update_user_profile(path.into_inner(), patch).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error, language),
    }
}

/// Handler for PATCH /users/{id}/reset-password
pub async fn reset_password<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let language = request_language(&req);
    match state.user_service.reset_password_by_admin(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(MessageResponse::new(messages::password_reset(
            &user.name, language,
        ))),
        Err(error) => handle_domain_error(error, language),
    }
}

/// Handler for DELETE /users/{id}
///
/// Soft delete. The user can no longer log in or refresh.
pub async fn delete_user<U, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, T>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    match state.user_service.delete_user(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error, request_language(&req)),
    }
}
