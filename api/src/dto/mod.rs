//! Request and response bodies

pub mod auth;
pub mod user;

pub use auth::{ChangePasswordRequest, LoginRequest, LogoutRequest, RefreshTokenRequest};
pub use user::{CreateUserRequest, PaginationQuery, UpdateUserRequest, UserResponse};
