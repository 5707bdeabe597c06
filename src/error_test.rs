use super::*;
use axum::body::to_bytes;

// =============================================================================
// status_code
// =============================================================================

#[test]
fn validation_maps_to_400() {
    let err = ApiError::Validation("Missing username".into());
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn conflict_maps_to_400() {
    let err = ApiError::Conflict("Username already exists".into());
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn auth_maps_to_401() {
    let err = ApiError::Auth("Bad username or password".into());
    assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
}

#[test]
fn not_found_maps_to_404() {
    let err = ApiError::NotFound("Todo not found".into());
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn internal_maps_to_500() {
    assert_eq!(ApiError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// IntoResponse — body shape is {"msg": ...}
// =============================================================================

async fn body_json(err: ApiError) -> serde_json::Value {
    let resp = err.into_response();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn response_body_carries_message() {
    let body = body_json(ApiError::Auth("Bad username or password".into())).await;
    assert_eq!(body, serde_json::json!({ "msg": "Bad username or password" }));
}

#[tokio::test]
async fn internal_response_hides_details() {
    let body = body_json(ApiError::Internal).await;
    assert_eq!(body["msg"], "An unexpected error occurred");
}

#[tokio::test]
async fn response_status_matches_variant() {
    let resp = ApiError::NotFound("Todo not found".into()).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn sqlx_error_degrades_to_internal() {
    let err: ApiError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, ApiError::Internal));
}
