//! Configuration for the user service

use lp_shared::config::AuthConfig;

/// Configuration for the user service
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Password given to created and reset users; `None` disables both
    pub default_password: Option<String>,
}

impl From<&AuthConfig> for UserServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            default_password: config.default_password.clone(),
        }
    }
}
