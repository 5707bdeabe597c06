//! Signed access-token issuance and verification.
//!
//! DESIGN
//! ======
//! Tokens are HS256 JWTs whose subject claim is the username embedded at
//! issuance. Verification fails closed: expiry, signature mismatch, and
//! malformed input all collapse into the same opaque error so callers
//! cannot distinguish why a token was rejected.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token generation failed: {0}")]
    Generation(jsonwebtoken::errors::Error),
    #[error("invalid or expired token")]
    Invalid,
}

/// Signing and verification keys plus the token lifetime.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    #[must_use]
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Load from `JWT_SECRET_KEY` and optional `TOKEN_TTL_SECS`.
    /// Returns `None` if the secret is missing or empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let secret = std::env::var("JWT_SECRET_KEY").ok().filter(|s| !s.is_empty())?;
        let ttl_secs = std::env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);
        Some(Self::new(secret.as_bytes(), ttl_secs))
    }

    /// Issue a signed, expiring token whose subject is `username`.
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims { sub: username.to_owned(), iat: now, exp: now + self.ttl_secs };
        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Generation)
    }

    /// Verify a token and recover the username embedded at issuance.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` on expiry, signature mismatch, or
    /// malformed input.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| TokenError::Invalid)?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
