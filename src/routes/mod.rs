//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the public auth endpoints and the bearer-protected todo endpoints
//! under a single Axum router. CORS origins come from the `ALLOWED_ORIGINS`
//! allow-list so the SPA frontend can be served from a different host.

pub mod auth;
pub mod todos;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";

/// Parse a comma-separated origin list, skipping entries that are not valid
/// header values.
pub(crate) fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect()
}

fn allowed_origins() -> Vec<HeaderValue> {
    let raw = std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.into());
    parse_origins(&raw)
}

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins())
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/todos", get(todos::list_todos).post(todos::add_todo))
        .route("/todos/{id}", put(todos::update_todo).delete(todos::delete_todo))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
