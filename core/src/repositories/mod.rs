pub mod base;
pub mod token;
pub mod user;

pub use base::{Entity, Repository};
pub use token::RefreshTokenRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mock"))]
pub use base::InMemoryRepository;
#[cfg(any(test, feature = "mock"))]
pub use token::MockRefreshTokenRepository;
#[cfg(any(test, feature = "mock"))]
pub use user::MockUserRepository;
