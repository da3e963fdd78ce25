//! Derives the service configurations from [`AppConfig`] and reports
//! settings that are unsafe outside development.

use lp_core::services::{AuthServiceConfig, TokenServiceConfig, UserServiceConfig};
use lp_shared::AppConfig;

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "launchpad-api";

/// Per-service configuration built from the application configuration
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub token: TokenServiceConfig,
    pub auth: AuthServiceConfig,
    pub user: UserServiceConfig,
    pub bcrypt_cost: u32,
}

impl ServiceSettings {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            token: TokenServiceConfig::from(&config.auth.jwt),
            auth: AuthServiceConfig::default(),
            user: UserServiceConfig::from(&config.auth),
            bcrypt_cost: config.auth.bcrypt_cost,
        }
    }
}

/// Configuration problems that do not prevent startup
pub fn config_warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.auth.jwt.is_using_default_secret() {
        warnings.push(
            "JWT_SECRET or JWT_REFRESH_SECRET is not set, development secrets are in use".to_string(),
        );
    }

    if config.auth.default_password.is_none() {
        warnings.push(
            "DEFAULT_PASSWORD is not set, creating users and resetting passwords will fail".to_string(),
        );
    }

    if config.environment.is_production() && config.cors.allows_any_origin() {
        warnings.push("CORS allows any origin in production".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_shared::{CorsConfig, Environment, JwtConfig};

    fn secure_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.auth.jwt = JwtConfig::new("access-secret-for-tests", "refresh-secret-for-tests");
        config.auth.default_password = Some("Welcome#2024".to_string());
        config
    }

    #[test]
    fn test_no_warnings_for_secure_config() {
        assert!(config_warnings(&secure_config()).is_empty());
    }

    #[test]
    fn test_warns_about_development_defaults() {
        let warnings = config_warnings(&AppConfig::default());

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("JWT_SECRET"));
        assert!(warnings[1].contains("DEFAULT_PASSWORD"));
    }

    #[test]
    fn test_warns_about_wildcard_cors_in_production() {
        let mut config = secure_config();
        config.cors = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            ..Default::default()
        };
        assert!(config_warnings(&config).is_empty());

        config.environment = Environment::Production;
        let warnings = config_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("CORS"));
    }

    #[test]
    fn test_service_settings_follow_app_config() {
        let mut config = secure_config();
        config.auth.bcrypt_cost = 6;
        config.auth.jwt = config.auth.jwt.clone().with_access_expiry_minutes(5);

        let settings = ServiceSettings::from_app_config(&config);

        assert_eq!(settings.bcrypt_cost, 6);
        assert_eq!(settings.token.access_token_expiry_seconds(), 300);
        assert_eq!(settings.token.access_secret, "access-secret-for-tests");
        assert_eq!(settings.user.default_password.as_deref(), Some("Welcome#2024"));
        assert!(settings.auth.revoke_all_on_reuse);
    }
}
