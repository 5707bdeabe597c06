//! Owner-scoped todo CRUD.
//!
//! DESIGN
//! ======
//! Every statement filters on `user_id`, so a todo owned by someone else is
//! indistinguishable from one that does not exist. Update and delete are
//! single atomic statements (`... RETURNING id, content`); delete returns
//! the value the row held immediately before removal.

use sqlx::{PgPool, Row};

/// Maximum todo content length in characters, matching the column width.
pub const MAX_CONTENT_LEN: usize = 80;

#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("Content is required")]
    EmptyContent,
    #[error("Content must be at most {MAX_CONTENT_LEN} characters")]
    ContentTooLong,
    #[error("todo not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Row returned from todo queries; also the response body shape.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TodoRow {
    pub id: i64,
    pub content: String,
}

fn row_to_todo(row: &sqlx::postgres::PgRow) -> TodoRow {
    TodoRow { id: row.get("id"), content: row.get("content") }
}

/// Reject empty or over-length content before it reaches the database.
///
/// # Errors
///
/// Returns `EmptyContent` or `ContentTooLong`.
pub fn validate_content(content: &str) -> Result<(), TodoError> {
    if content.is_empty() {
        return Err(TodoError::EmptyContent);
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(TodoError::ContentTooLong);
    }
    Ok(())
}

/// List all todos owned by `owner_id`, in insertion order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_todos(pool: &PgPool, owner_id: i64) -> Result<Vec<TodoRow>, TodoError> {
    let rows = sqlx::query("SELECT id, content FROM todos WHERE user_id = $1 ORDER BY id")
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(row_to_todo).collect())
}

/// Create a todo owned by `owner_id`.
///
/// # Errors
///
/// Returns a validation error for bad content, or a database error.
pub async fn add_todo(pool: &PgPool, owner_id: i64, content: &str) -> Result<TodoRow, TodoError> {
    validate_content(content)?;

    let row = sqlx::query(
        r"INSERT INTO todos (user_id, content)
          VALUES ($1, $2)
          RETURNING id, content",
    )
    .bind(owner_id)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(row_to_todo(&row))
}

/// Replace the content of a todo owned by `owner_id`.
///
/// # Errors
///
/// Returns a validation error for bad content, `NotFound` if no todo with
/// `todo_id` is owned by the caller, or a database error.
pub async fn update_todo(
    pool: &PgPool,
    owner_id: i64,
    todo_id: i64,
    content: &str,
) -> Result<TodoRow, TodoError> {
    validate_content(content)?;

    let row = sqlx::query(
        r"UPDATE todos SET content = $1
          WHERE id = $2 AND user_id = $3
          RETURNING id, content",
    )
    .bind(content)
    .bind(todo_id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_todo).ok_or(TodoError::NotFound(todo_id))
}

/// Delete a todo owned by `owner_id`, returning its final value.
///
/// # Errors
///
/// Returns `NotFound` under the same ownership rule as update, or a
/// database error.
pub async fn delete_todo(pool: &PgPool, owner_id: i64, todo_id: i64) -> Result<TodoRow, TodoError> {
    let row = sqlx::query(
        r"DELETE FROM todos
          WHERE id = $1 AND user_id = $2
          RETURNING id, content",
    )
    .bind(todo_id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_todo).ok_or(TodoError::NotFound(todo_id))
}

#[cfg(test)]
#[path = "todo_test.rs"]
mod tests;
