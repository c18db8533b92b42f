// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use carbon_tracker::error::{AppError, SERVER_ERROR_MESSAGE};

async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_keeps_message() {
    let (status, json) = body_json(AppError::NotFound("Activity abc not found".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Activity abc not found");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_validation_includes_errors() {
    let (status, json) = body_json(AppError::Validation {
        message: "Validation failed".to_string(),
        errors: vec!["a".to_string(), "b".to_string()],
    })
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"], serde_json::json!(["a", "b"]));
}

#[tokio::test]
async fn test_server_errors_hide_details() {
    let (status, json) = body_json(AppError::Database("connection refused".to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], SERVER_ERROR_MESSAGE);

    let (status, json) = body_json(AppError::Internal(anyhow::anyhow!("secret detail"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], SERVER_ERROR_MESSAGE);
    assert!(!json.to_string().contains("secret"));
}
