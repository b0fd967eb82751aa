//! Root endpoint and the generic route-level fallbacks.

use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API description")
    )
)]
pub async fn index_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the RESTful API",
        "version": "1.0.0",
        "endpoints": {
            "GET /users": "Get all users",
            "GET /users/{id}": "Get user by ID",
            "POST /users": "Create new user",
            "PUT /users/{id}": "Update user by ID",
            "DELETE /users/{id}": "Delete user by ID"
        }
    }))
}

/// Router-level fallback for paths no route matches.
pub async fn endpoint_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Endpoint not found".to_string(),
        }),
    )
}

/// Method-router fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}
