//! Maps service failures onto HTTP responses.

use crate::app::user_service::ServiceError;
use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;
use tower_http::catch_panic::ResponseForPanic;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::MissingFields
            | ServiceError::EmptyUpdate
            | ServiceError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let ServiceError::Internal(source) = &self {
            tracing::error!(error = %source, "unclassified service fault");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Turns a panicking handler into the generic 500 JSON body instead of the
/// plain-text default, keeping the error contract uniform.
#[derive(Clone, Copy, Debug)]
pub struct JsonPanicResponse;

impl ResponseForPanic for JsonPanicResponse {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            (*s).to_string()
        } else {
            "non-string panic payload".to_string()
        };
        tracing::error!(%detail, "request handler panicked");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_and_conflict_map_to_400() {
        for err in [
            ServiceError::MissingFields,
            ServiceError::EmptyUpdate,
            ServiceError::DuplicateEmail,
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn not_found_carries_the_documented_body() {
        let response = ServiceError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "User not found");
    }

    #[tokio::test]
    async fn internal_fault_never_echoes_its_cause() {
        let response =
            ServiceError::Internal(anyhow::anyhow!("connection pool exhausted")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
    }
}
