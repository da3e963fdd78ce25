//! Main token service implementation

use constant_time_eq::constant_time_eq;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signing and verification keys for one token kind
struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Encodes and decodes access and refresh JWTs
///
/// Access and refresh tokens are signed with different secrets, so one can
/// never be presented in place of the other.
pub struct TokenService {
    config: TokenServiceConfig,
    access_keys: KeyPair,
    refresh_keys: KeyPair,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let access_keys = KeyPair::from_secret(&config.access_secret);
        let refresh_keys = KeyPair::from_secret(&config.refresh_secret);

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            access_keys,
            refresh_keys,
            validation,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds()
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_expiry_seconds(&self) -> i64 {
        self.config.refresh_token_expiry_seconds()
    }

    /// Generates an access token carrying the user's id, email and role
    pub fn generate_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::for_user(user, None, self.access_expiry_seconds());
        self.encode_jwt(&claims, &self.access_keys)
    }

    /// Generates a refresh token carrying `jti` as its revocation key
    pub fn generate_refresh_token(&self, user: &User, jti: &str) -> Result<String, DomainError> {
        let claims = Claims::for_user(user, Some(jti.to_string()), self.refresh_expiry_seconds());
        self.encode_jwt(&claims, &self.refresh_keys)
    }

    /// Verifies an access token and returns the claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_jwt(token, &self.access_keys)
    }

    /// Verifies a refresh token and returns the claims
    ///
    /// This checks signature and expiry only. Whether the token is still
    /// honored is decided by the revocation ledger.
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_jwt(token, &self.refresh_keys)
    }

    /// Hashes a token for storage
    pub fn hash_token(token: &str) -> String {
        hex::encode(Sha256::digest(token.as_bytes()))
    }

    /// Compares a presented token against a stored digest in constant time
    pub fn verify_token_hash(token: &str, hashed_token: &str) -> bool {
        constant_time_eq(Self::hash_token(token).as_bytes(), hashed_token.as_bytes())
    }

    fn encode_jwt(&self, claims: &Claims, keys: &KeyPair) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &keys.encoding).map_err(|e| {
            tracing::error!(error = %e, "Failed to encode JWT");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    fn decode_jwt(&self, token: &str, keys: &KeyPair) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                    claim: claim.clone(),
                },
                _ => TokenError::InvalidTokenFormat,
            })
    }
}
