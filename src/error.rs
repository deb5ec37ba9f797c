use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every way a registry operation or guard can reject a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// User or todo absent
    #[error("{0}")]
    NotFound(String),

    /// Username already taken
    #[error("{0}")]
    Conflict(String),

    /// Malformed identifier
    #[error("{0}")]
    InvalidArgument(String),

    /// Operation redundant for the current state, e.g. a second pro upgrade
    #[error("{0}")]
    InvalidState(String),

    /// Non-pro user already holds the maximum number of todos
    #[error("{0}")]
    QuotaExceeded(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate usernames answer 400, not 409
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidState(_) => StatusCode::BAD_REQUEST,
            AppError::QuotaExceeded(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");

        let error_response = json!({ "error": self.to_string() });
        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Conflict("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidState("x".into()), StatusCode::BAD_REQUEST),
            (AppError::QuotaExceeded("x".into()), StatusCode::FORBIDDEN),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error:?}");
        }
    }

    #[test]
    fn response_carries_status() {
        let response = AppError::QuotaExceeded("User todos are full".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
