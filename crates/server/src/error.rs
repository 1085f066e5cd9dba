//! HTTP error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scribo_core::ScriboError;
use serde_json::json;

/// Error returned by API handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Core(ScriboError),
}

impl From<ScriboError> for ApiError {
    fn from(err: ScriboError) -> Self {
        Self::Core(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Core(err) => match err {
                ScriboError::ConfigError(_) | ScriboError::ServiceError(_) | ScriboError::InvalidUrl(_) => {
                    StatusCode::BAD_REQUEST
                }
                ScriboError::TopicNotFound(_) | ScriboError::FileNotFound(_) => StatusCode::NOT_FOUND,
                ScriboError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                ScriboError::HttpError(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Core(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.message(), "request failed");
        } else {
            tracing::debug!(error = %self.message(), %status, "request rejected");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
