//! Application state and the route table

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};
use lp_core::repositories::{RefreshTokenRepository, UserRepository};
use lp_core::services::{AuthService, Authenticator, UserService};
use lp_infra::DatabasePool;

use crate::handlers::{json_error_handler, path_error_handler, query_error_handler};
use crate::routes;

/// Services shared by all handlers
pub struct AppState<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    pub auth_service: Arc<AuthService<U, T>>,
    pub user_service: Arc<UserService<U>>,
    /// Probed by the health endpoint when present
    pub database: Option<DatabasePool>,
}

impl<U, T> AppState<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    pub fn new(auth_service: Arc<AuthService<U, T>>, user_service: Arc<UserService<U>>) -> Self {
        Self {
            auth_service,
            user_service,
            database: None,
        }
    }

    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}

/// Build the application without server-level middleware
///
/// Logging and CORS are added by the binary, so tests can drive the routes
/// directly.
pub fn create_app<U, T>(
    state: web::Data<AppState<U, T>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let authenticator: Arc<dyn Authenticator> = state.auth_service.clone();

    App::new()
        .app_data(state)
        .app_data(web::Data::from(authenticator))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/health", web::get().to(routes::health::health_check::<U, T>))
        .configure(routes::auth::configure::<U, T>)
        .configure(routes::users::configure::<U, T>)
        .default_service(web::to(routes::not_found))
}
