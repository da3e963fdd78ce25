//! Outgoing mail settings

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// SMTP settings for transactional mail
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub from: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: 587,
            user: None,
            password: None,
            from: None,
        }
    }
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_opt("MAIL_HOST"),
            port: env_or("MAIL_PORT", 587),
            user: env_opt("MAIL_USER"),
            password: env_opt("MAIL_PASSWORD"),
            from: env_opt("MAIL_FROM"),
        }
    }

    /// A host and sender address are the minimum for sending
    pub fn is_configured(&self) -> bool {
        self.host.is_some() && self.from.is_some()
    }
}
