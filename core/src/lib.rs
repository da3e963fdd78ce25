//! # Launchpad Core
//!
//! Core business logic and domain layer for the Launchpad backend.
//! This crate contains domain entities, the authentication and user
//! services, repository interfaces, and error types. Storage and HTTP
//! live in `lp_infra` and `lp_api`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, RefreshToken, RevocationReason, Role, User, UserPatch};
pub use domain::value_objects::{AuthResponse, CreateUser, UserProfile, UserQuery};
pub use errors::{DomainError, DomainResult, ErrorKind};
pub use repositories::{RefreshTokenRepository, Repository, UserRepository};
pub use services::{AuthService, Authenticator, PasswordHasher, TokenService, UserService};
