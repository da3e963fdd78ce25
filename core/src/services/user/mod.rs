//! User management service module
//!
//! Administrator-facing CRUD over users plus profile updates for the
//! current user. New and reset accounts receive the configured default
//! password and must change it.

mod config;
mod service;


pub use config::UserServiceConfig;
pub use service::UserService;
