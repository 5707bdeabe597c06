//! Todo routes — owner-scoped CRUD behind the `AuthUser` extractor.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;

use crate::error::ApiError;
use crate::routes::auth::AuthUser;
use crate::services::todo::{self, TodoError, TodoRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TodoBody {
    pub content: Option<String>,
}

pub(crate) fn todo_error_to_api(err: TodoError) -> ApiError {
    match err {
        TodoError::EmptyContent | TodoError::ContentTooLong => ApiError::Validation(err.to_string()),
        // One message for "absent" and "owned by someone else" — ownership
        // must not leak through error responses.
        TodoError::NotFound(_) => ApiError::NotFound("Todo not found".into()),
        TodoError::Db(e) => e.into(),
    }
}

/// `GET /todos` — list the caller's todos.
pub async fn list_todos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<TodoRow>>, ApiError> {
    let rows = todo::list_todos(&state.pool, auth.user.id)
        .await
        .map_err(todo_error_to_api)?;
    Ok(Json(rows))
}

/// `POST /todos` — create a todo owned by the caller.
pub async fn add_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<TodoBody>,
) -> Result<impl IntoResponse, ApiError> {
    let content = body.content.as_deref().unwrap_or_default();
    let row = todo::add_todo(&state.pool, auth.user.id, content)
        .await
        .map_err(todo_error_to_api)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PUT /todos/{id}` — replace a todo's content.
pub async fn update_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<i64>,
    Json(body): Json<TodoBody>,
) -> Result<Json<TodoRow>, ApiError> {
    let content = body.content.as_deref().unwrap_or_default();
    let row = todo::update_todo(&state.pool, auth.user.id, todo_id, content)
        .await
        .map_err(todo_error_to_api)?;
    Ok(Json(row))
}

/// `DELETE /todos/{id}` — delete a todo, returning its final value.
pub async fn delete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<i64>,
) -> Result<Json<TodoRow>, ApiError> {
    let row = todo::delete_todo(&state.pool, auth.user.id, todo_id)
        .await
        .map_err(todo_error_to_api)?;
    Ok(Json(row))
}

#[cfg(test)]
#[path = "todos_test.rs"]
mod tests;
