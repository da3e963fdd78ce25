//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, Authenticator};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
pub use user::{UserService, UserServiceConfig};
