//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Revoke every refresh token of a user when one of their rotated
    /// tokens is presented again
    pub revoke_all_on_reuse: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            revoke_all_on_reuse: true,
        }
    }
}
