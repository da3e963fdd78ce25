//! Token service module for JWT management
//!
//! This module handles the stateless half of token handling:
//! - HS256 access and refresh token encoding with separate secrets
//! - Token verification with error classification
//! - Refresh token digests for the revocation ledger

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
