use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Failures surfaced by the request and URI collaborators.
///
/// Link construction itself adds no validation; these are the native failures
/// of header parsing and [`url`] passed through as-is.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Missing Host header")]
    MissingHost,

    #[error("Invalid {0} header")]
    InvalidHeader(&'static str),

    #[error("Invalid base URI: {0}")]
    InvalidBaseUri(#[from] url::ParseError),

    #[error("URI cannot be used as a base: {0}")]
    CannotBeABase(String),
}

impl IntoResponse for LinkError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            LinkError::MissingHost => (StatusCode::BAD_REQUEST, "validation_error", json!({})),
            LinkError::InvalidHeader(header) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                json!({ "header": header }),
            ),
            LinkError::InvalidBaseUri(_) | LinkError::CannotBeABase(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                json!({}),
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message: self.to_string(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_host_is_bad_request() {
        let response = LinkError::MissingHost.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_base_is_internal() {
        let err = LinkError::from(url::Url::parse("nope").unwrap_err());

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
