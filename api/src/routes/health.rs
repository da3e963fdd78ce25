use actix_web::{web, HttpResponse};
use lp_core::repositories::{RefreshTokenRepository, UserRepository};
use lp_shared::{HealthResponse, HealthStatus};

use crate::app::AppState;
use crate::config::SERVICE_NAME;

/// Handler for GET /health
///
/// Always answers 200. With a database attached, the status is `degraded`
/// when `SELECT 1` returns something unexpected and `unhealthy` when the
/// query fails.
pub async fn health_check<U, T>(state: web::Data<AppState<U, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let status = match &state.database {
        None => HealthStatus::Healthy,
        Some(database) => match database.health_check().await {
            Ok(true) => HealthStatus::Healthy,
            Ok(false) => HealthStatus::Degraded,
            Err(e) => {
                log::warn!("Database health check failed: {}", e);
                HealthStatus::Unhealthy
            }
        },
    };

    HttpResponse::Ok().json(HealthResponse::new(status, SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
