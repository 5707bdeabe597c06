use super::*;
use crate::services::todo::MAX_CONTENT_LEN;

// =============================================================================
// todo_error_to_api
// =============================================================================

#[test]
fn empty_content_maps_to_400_with_message() {
    let err = todo_error_to_api(TodoError::EmptyContent);
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Content is required");
}

#[test]
fn over_length_content_maps_to_400() {
    let err = todo_error_to_api(TodoError::ContentTooLong);
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), format!("Content must be at most {MAX_CONTENT_LEN} characters"));
}

#[test]
fn not_found_maps_to_404() {
    let err = todo_error_to_api(TodoError::NotFound(42));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn not_found_message_does_not_leak_the_id() {
    // The service error carries the id for logs; the client response must
    // stay generic for absent and foreign-owned rows alike.
    let err = todo_error_to_api(TodoError::NotFound(42));
    assert_eq!(err.to_string(), "Todo not found");
}

#[test]
fn db_error_maps_to_500() {
    let err = todo_error_to_api(TodoError::Db(sqlx::Error::PoolClosed));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// TodoBody deserialization
// =============================================================================

#[test]
fn todo_body_tolerates_missing_content() {
    let parsed: TodoBody = serde_json::from_str("{}").unwrap();
    assert!(parsed.content.is_none());
}

#[test]
fn todo_body_parses_content() {
    let parsed: TodoBody = serde_json::from_str(r#"{"content":"buy milk"}"#).unwrap();
    assert_eq!(parsed.content.as_deref(), Some("buy milk"));
}
