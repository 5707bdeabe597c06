//! Account registration and credential verification.
//!
//! DESIGN
//! ======
//! Passwords are stored as salted argon2 PHC strings; plaintext never
//! reaches the database or the logs. Login treats an unknown username and a
//! wrong password identically so callers cannot enumerate accounts.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use sqlx::{PgPool, Row};

use crate::services::token::{TokenError, TokenKeys};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("username already exists: {0}")]
    UsernameTaken(String),
    #[error("bad username or password")]
    BadCredentials,
    #[error("password hashing failed")]
    Hash,
    #[error("token error: {0}")]
    Token(#[from] TokenError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// User row resolved from a verified identity.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
}

/// Hash a password into a salted PHC string.
///
/// # Errors
///
/// Returns `AuthError::Hash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|_| AuthError::Hash)
}

/// Check a password against a stored PHC string. Malformed stored hashes
/// count as a failed check.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
}

/// Create a new user. Uniqueness is enforced by the database constraint;
/// the insert is race-free via `ON CONFLICT DO NOTHING`.
///
/// # Errors
///
/// Returns `UsernameTaken` if the username exists, `Hash` if hashing fails,
/// or a database error.
pub async fn register(pool: &PgPool, username: &str, password: &str) -> Result<(), AuthError> {
    let password_hash = hash_password(password)?;

    let row = sqlx::query(
        r"INSERT INTO users (username, password_hash)
          VALUES ($1, $2)
          ON CONFLICT (username) DO NOTHING
          RETURNING id",
    )
    .bind(username)
    .bind(&password_hash)
    .fetch_optional(pool)
    .await?;

    if row.is_none() {
        return Err(AuthError::UsernameTaken(username.to_owned()));
    }
    Ok(())
}

/// Verify credentials and issue an access token.
///
/// # Errors
///
/// Returns `BadCredentials` when the username is unknown or the password
/// does not match — the two cases are indistinguishable to the caller.
pub async fn login(
    pool: &PgPool,
    tokens: &TokenKeys,
    username: &str,
    password: &str,
) -> Result<String, AuthError> {
    let row = sqlx::query("SELECT password_hash FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AuthError::BadCredentials);
    };
    let stored_hash: String = row.get("password_hash");
    if !verify_password(password, &stored_hash) {
        return Err(AuthError::BadCredentials);
    }

    Ok(tokens.issue(username)?)
}

/// Resolve a verified token subject to a live user row. Returns `None` if
/// the account no longer exists.
///
/// # Errors
///
/// Returns a database error if the lookup fails.
pub async fn find_user(pool: &PgPool, username: &str) -> Result<Option<UserRow>, sqlx::Error> {
    let row = sqlx::query("SELECT id, username FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| UserRow { id: r.get("id"), username: r.get("username") }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
