use assetdesk_api::error::AppError;
use assetdesk_core::error::CoreError;
use assetdesk_core::validation::FieldError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::{json, Value};

async fn render(err: CoreError) -> (StatusCode, Value) {
    let response = AppError::from(err).into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn validation_error_lists_fields() {
    let (status, body) = render(CoreError::Validation(vec![
        FieldError::new("name", "name must not be empty"),
        FieldError::new("value", "value must be greater than or equal to 0"),
    ]))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "message": "Validation failed",
            "code": "VALIDATION_ERROR",
            "errors": [
                {"field": "name", "message": "name must not be empty"},
                {"field": "value", "message": "value must be greater than or equal to 0"},
            ],
        })
    );
}

#[tokio::test]
async fn not_found_carries_entity_and_id() {
    let (status, body) = render(CoreError::NotFound {
        entity: "Client",
        id: 12,
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"message": "Client with id 12 not found", "code": "NOT_FOUND"})
    );
}

#[tokio::test]
async fn not_found_for_parent_names_the_parent() {
    let (status, body) = render(CoreError::NotFoundForParent {
        entity: "assets",
        parent: "client",
        parent_id: 3,
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No assets found for client with id 3");
}

#[tokio::test]
async fn conflict_uses_its_message_verbatim() {
    let (status, body) = render(CoreError::Conflict(
        "A client with this email already exists".into(),
    ))
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({"message": "A client with this email already exists", "code": "CONFLICT"})
    );
}

#[tokio::test]
async fn internal_error_hides_details() {
    let (status, body) = render(CoreError::Internal(
        "Failed to delete Client: violates foreign key constraint".into(),
    ))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"message": "An internal error occurred", "code": "INTERNAL_ERROR"})
    );
}
