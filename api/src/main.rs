use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::{info, warn};
use lp_api::config::{config_warnings, ServiceSettings};
use lp_api::middleware::create_cors;
use lp_api::{create_app, AppState};
use lp_core::repositories::RefreshTokenRepository;
use lp_core::services::{AuthService, PasswordHasher, TokenService, UserService};
use lp_infra::{DatabasePool, PgRefreshTokenRepository, PgUserRepository};
use lp_shared::AppConfig;

/// How often revoked refresh token records are purged
const TOKEN_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Starting Launchpad API ({})", config.environment);
    for warning in config_warnings(&config) {
        warn!("{}", warning);
    }

    let database = DatabasePool::new(&config.database)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.display_target()))?;

    let settings = ServiceSettings::from_app_config(&config);
    let user_repository = Arc::new(PgUserRepository::new(database.get_pool().clone()));
    let token_repository = Arc::new(PgRefreshTokenRepository::new(database.get_pool().clone()));
    let password_hasher = Arc::new(PasswordHasher::new(settings.bcrypt_cost));
    let token_service = Arc::new(TokenService::new(settings.token));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_repository),
        token_service,
        Arc::clone(&password_hasher),
        settings.auth,
    ));
    let user_service = Arc::new(UserService::new(user_repository, password_hasher, settings.user));

    let state = web::Data::new(
        AppState::new(auth_service, user_service).with_database(database.clone()),
    );

    spawn_token_cleanup(token_repository);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || {
        create_app(state.clone())
            .wrap(create_cors(&cors_config))
            .wrap(Logger::default())
    });
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    Ok(())
}

/// Periodically delete revoked refresh token records
fn spawn_token_cleanup(tokens: Arc<PgRefreshTokenRepository>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TOKEN_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match tokens.delete_revoked().await {
                Ok(0) => {}
                Ok(deleted) => info!("Purged {} revoked refresh tokens", deleted),
                Err(e) => warn!("Refresh token cleanup failed: {}", e),
            }
        }
    });
}
