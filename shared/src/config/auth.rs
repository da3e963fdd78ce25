//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

const DEFAULT_ACCESS_SECRET: &str = "your-secret-key-change-in-production";
const DEFAULT_REFRESH_SECRET: &str = "your-refresh-secret-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used to sign access tokens
    pub secret: String,

    /// Secret used to sign refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in minutes
    pub access_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_expiry_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_ACCESS_SECRET),
            refresh_secret: String::from(DEFAULT_REFRESH_SECRET),
            access_expiry_minutes: 15,
            refresh_expiry_days: 7,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with both secrets
    pub fn new(secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env_or("JWT_SECRET", defaults.secret),
            refresh_secret: env_or("JWT_REFRESH_SECRET", defaults.refresh_secret),
            access_expiry_minutes: env_or("JWT_EXPIRATION_MINUTES", defaults.access_expiry_minutes),
            refresh_expiry_days: env_or("JWT_REFRESH_EXPIRATION_DAYS", defaults.refresh_expiry_days),
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_expiry_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_expiry_days = days;
        self
    }

    /// Access token lifetime in seconds
    pub fn access_expiry_seconds(&self) -> i64 {
        self.access_expiry_minutes * 60
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_expiry_seconds(&self) -> i64 {
        self.refresh_expiry_days * 86_400
    }

    /// Check if either secret is still the development default (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_ACCESS_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password assigned to admin-created users and on admin resets
    #[serde(default, skip_serializing)]
    pub default_password: Option<String>,

    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            default_password: None,
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            default_password: env_opt("DEFAULT_PASSWORD"),
            bcrypt_cost: env_or("BCRYPT_COST", default_bcrypt_cost()),
        }
    }

    /// Set the default password
    pub fn with_default_password(mut self, password: impl Into<String>) -> Self {
        self.default_password = Some(password.into());
        self
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}
