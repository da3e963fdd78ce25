//! HTTP layer of the Launchpad backend
//!
//! Routes, request DTOs, the JWT middleware and the mapping from domain
//! errors to localized JSON responses. The binary in `main.rs` wires these
//! over the PostgreSQL repositories; the integration tests wire them over
//! the in-memory ones.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
