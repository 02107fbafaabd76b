use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tickboard_core::ValidationError;

use crate::fetch::{SourceError, SourceErrorKind};

/// Unified error type for dashboard API responses.
///
/// Gate outcomes are redirects and never pass through here.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("bad_request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("rate_limited: {0}")]
    RateLimited(String),

    #[error("upstream_error: {0}")]
    Upstream(String),

    #[error("internal_error: {0}")]
    Internal(String),
}

impl From<ValidationError> for WebError {
    fn from(error: ValidationError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<SourceError> for WebError {
    fn from(error: SourceError) -> Self {
        match error.kind() {
            SourceErrorKind::InvalidRequest => Self::BadRequest(error.message().to_owned()),
            SourceErrorKind::RateLimited => Self::RateLimited(error.message().to_owned()),
            SourceErrorKind::Unavailable => Self::Upstream(error.message().to_owned()),
            SourceErrorKind::Internal => Self::Internal(error.message().to_owned()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
