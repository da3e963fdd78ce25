//! Shared utilities and common types for the Launchpad server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structure and error codes
//! - Pagination, language and response types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, MailConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{
    HealthResponse, HealthStatus, Language, MessageResponse, PageRequest, PaginatedResult,
    PaginationMeta, SortOrder,
};
