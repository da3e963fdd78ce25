//! Authentication service module
//!
//! This module provides email and password authentication:
//! - Login issuing an access and refresh token pair
//! - Refresh token rotation and logout revocation
//! - Password change for the current user
//! - Access token authentication and role checks for the HTTP layer

mod authenticator;
mod config;
mod service;


pub use authenticator::Authenticator;
pub use config::AuthServiceConfig;
pub use service::AuthService;
