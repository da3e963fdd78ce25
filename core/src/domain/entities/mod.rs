//! Domain entities representing core business objects.

pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{Claims, RefreshToken, RefreshTokenPatch, RefreshTokenSortColumn, RevocationReason};
pub use user::{Role, User, UserPatch, UserSortColumn};
