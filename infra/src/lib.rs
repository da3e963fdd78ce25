//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Launchpad
//! backend. It provides the PostgreSQL connection pool and the `sqlx`
//! implementations of the repository traits defined in `lp_core`.
//!
//! ## Architecture
//!
//! - **Database**: pool management and health checks
//! - **Postgres**: `PgUserRepository` and `PgRefreshTokenRepository`
//!
//! The reference schema the repositories expect lives in `sql/schema.sql`.

pub mod database;
pub mod error;

pub use database::{DatabasePool, PgRefreshTokenRepository, PgUserRepository, PoolStatistics};
pub use error::InfrastructureError;
