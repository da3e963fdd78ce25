//! bcrypt password hashing
//!
//! Hashing and verification run on tokio's blocking pool, off the request
//! executor.

use tokio::sync::OnceCell;

use crate::errors::{DomainError, DomainResult};

/// Plaintext hashed once to keep login time constant for unknown emails
const DUMMY_PASSWORD: &str = "launchpad-timing-equalizer";

/// Hashes and verifies passwords with a fixed bcrypt cost
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: OnceCell<String>,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            dummy_hash: OnceCell::new(),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt
    pub async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("failed to hash password: {}", e)))
    }

    /// Verify a password against a stored hash
    ///
    /// A malformed stored hash verifies as `false` instead of failing the
    /// request, so a corrupt row cannot be told apart from a wrong password.
    pub async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("password verification task failed: {}", e)))?;

        match result {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }

    /// Spend the same work as a real verification and discard the result
    pub async fn verify_dummy(&self, password: &str) -> DomainResult<()> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| self.hash(DUMMY_PASSWORD))
            .await?;
        self.verify(password, hash).await?;
        Ok(())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
