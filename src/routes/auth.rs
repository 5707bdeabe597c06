//! Auth routes — registration, login, and the bearer-token extractor.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::services::auth as auth_svc;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Request body for both `/register` and `/login`. Fields are optional so
/// missing-field failures are reported by the handler, not the JSON layer.
#[derive(Deserialize)]
pub struct CredentialsBody {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Reject missing or empty credential fields, distinguishing which field is
/// at fault. Empty strings count as missing.
pub(crate) fn validate_credentials(body: &CredentialsBody) -> Result<(&str, &str), ApiError> {
    let username = body.username.as_deref().filter(|s| !s.is_empty());
    let password = body.password.as_deref().filter(|s| !s.is_empty());

    match (username, password) {
        (Some(u), Some(p)) => Ok((u, p)),
        (None, None) => Err(ApiError::Validation("Missing username and password".into())),
        (None, Some(_)) => Err(ApiError::Validation("Missing username".into())),
        (Some(_), None) => Err(ApiError::Validation("Missing password".into())),
    }
}

pub(crate) fn auth_error_to_api(err: AuthError) -> ApiError {
    match err {
        AuthError::UsernameTaken(_) => ApiError::Conflict("Username already exists".into()),
        AuthError::BadCredentials => ApiError::Auth("Bad username or password".into()),
        AuthError::Db(e) => e.into(),
        AuthError::Hash | AuthError::Token(_) => {
            tracing::error!(error = %err, "credential processing failed");
            ApiError::Internal
        }
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: auth_svc::UserRow,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Auth("Missing bearer token".into()))?;

        let app_state = AppState::from_ref(state);
        let username = app_state
            .tokens
            .verify(bearer.token())
            .map_err(|_| ApiError::Auth("Invalid or expired token".into()))?;

        // The token may outlive the account it was issued for.
        let user = auth_svc::find_user(&app_state.pool, &username)
            .await?
            .ok_or_else(|| ApiError::Auth("Unknown user".into()))?;

        tracing::debug!(user = %user.username, "authenticated request");
        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /register` — create an account.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (username, password) = validate_credentials(&body)?;

    auth_svc::register(&state.pool, username, password)
        .await
        .map_err(auth_error_to_api)?;

    Ok((StatusCode::CREATED, Json(json!({ "msg": "Registration successful" }))))
}

/// `POST /login` — verify credentials and issue an access token.
///
/// Unlike `/register`, missing fields are not reported separately: an absent
/// field simply fails the credential check, same as a wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let username = body.username.as_deref().unwrap_or_default();
    let password = body.password.as_deref().unwrap_or_default();

    let token = auth_svc::login(&state.pool, &state.tokens, username, password)
        .await
        .map_err(auth_error_to_api)?;

    Ok(Json(json!({ "access_token": token })))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
