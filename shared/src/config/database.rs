//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Database configuration for PostgreSQL connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database server host
    pub host: String,

    /// Database server port
    pub port: u16,

    /// Database user
    pub username: String,

    /// Database password
    #[serde(skip_serializing)]
    pub password: String,

    /// Database name
    pub name: String,

    /// Require TLS for the connection
    #[serde(default)]
    pub ssl: bool,

    /// Full connection URL, overrides the individual fields when set
    #[serde(default, skip_serializing)]
    pub url: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 5432,
            username: String::from("postgres"),
            password: String::from("docker"),
            name: String::from("launchpad"),
            ssl: false,
            url: None,
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("DATABASE_HOST", defaults.host),
            port: env_or("DATABASE_PORT", defaults.port),
            username: env_or("DATABASE_USERNAME", defaults.username),
            password: env_or("DATABASE_PASSWORD", defaults.password),
            name: env_or("DATABASE_NAME", defaults.name),
            ssl: env_or("DATABASE_SSL", defaults.ssl),
            url: env_opt("DATABASE_URL"),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
            connect_timeout: env_or("DATABASE_CONNECT_TIMEOUT", defaults.connect_timeout),
            idle_timeout: defaults.idle_timeout,
        }
    }

    /// Create a configuration from an explicit connection URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Connection URL handed to the driver
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        let mut url = format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        );
        if self.ssl {
            url.push_str("?sslmode=require");
        }
        url
    }

    /// Host/port/name triple, safe to log
    pub fn display_target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.name)
    }
}
