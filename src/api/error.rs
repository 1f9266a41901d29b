//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::guidance::GuidanceError;
use crate::profiles::ProfileError;

/// User-facing message for any upstream guidance failure.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze symptoms. Please try again.";

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Upstream failure: {0}")]
    Upstream(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
            ApiError::Conflict(detail) => (StatusCode::CONFLICT, "CONFLICT", detail),
            ApiError::Upstream(detail) => {
                tracing::error!(detail, "Guidance request failed upstream");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_FAILED",
                    ANALYSIS_FAILED_MESSAGE.to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<GuidanceError> for ApiError {
    fn from(err: GuidanceError) -> Self {
        if err.is_upstream() {
            return ApiError::Upstream(err.to_string());
        }
        match err {
            GuidanceError::Validation(message) => ApiError::BadRequest(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProfileError::DefaultUndeletable => ApiError::Conflict(err.to_string()),
            ProfileError::InvalidName => ApiError::BadRequest(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::ProviderError;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_message() {
        let err: ApiError = GuidanceError::Validation("too short".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "too short");
    }

    #[tokio::test]
    async fn provider_error_is_opaque_502() {
        let err: ApiError = GuidanceError::Provider(ProviderError::Status {
            status: 403,
            body: "API key invalid: sk-secret".into(),
        })
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "ANALYSIS_FAILED");
        assert_eq!(json["error"]["message"], ANALYSIS_FAILED_MESSAGE);
        assert!(!json.to_string().contains("sk-secret"));
    }

    #[tokio::test]
    async fn malformed_response_is_opaque_502() {
        let err: ApiError = GuidanceError::MalformedResponse("no braces".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], ANALYSIS_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn internal_hides_detail() {
        let response = ApiError::Internal("lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn profile_errors_map_to_statuses() {
        let not_found: ApiError = ProfileError::NotFound("user_x".into()).into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let undeletable: ApiError = ProfileError::DefaultUndeletable.into();
        assert_eq!(undeletable.into_response().status(), StatusCode::CONFLICT);

        let invalid: ApiError = ProfileError::InvalidName.into();
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
