//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod user_input;
pub mod user_profile;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use user_input::{CreateUser, UserQuery};
pub use user_profile::UserProfile;
