//! PostgreSQL implementations of the repository traits

pub(crate) mod query;
pub mod token_repository_impl;
pub mod user_repository_impl;

pub use token_repository_impl::PgRefreshTokenRepository;
pub use user_repository_impl::PgUserRepository;
