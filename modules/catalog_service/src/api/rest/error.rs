//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::{CatalogError, ErrorKind, Status};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// HTTP status for an envelope status
pub fn http_status(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::BadRequest => StatusCode::BAD_REQUEST,
        Status::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Problem for a failed envelope; only the fixed status message is exposed
pub fn envelope_problem(status: Status) -> Problem {
    let code = http_status(status);
    Problem::new(code, code.canonical_reason().unwrap_or("Error")).with_detail(status.message())
}

/// Problem for an empty successful lookup
pub fn not_found(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, "Not Found").with_detail(detail)
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: CatalogError) -> Problem {
    match error.kind() {
        ErrorKind::Validation => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(error.to_string())
        }
        ErrorKind::NotFound => not_found(error.to_string()),
        ErrorKind::Storage => {
            tracing::error!(error = ?error, "internal error");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_do_not_leak_their_cause() {
        let problem = map_domain_error(CatalogError::Storage(anyhow::anyhow!(
            "password=hunter2 rejected"
        )));
        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail.as_deref(), Some("An unexpected error occurred"));
    }

    #[test]
    fn missing_artist_is_a_404() {
        let problem = map_domain_error(CatalogError::not_found("artist", 42));
        assert_eq!(problem.status, 404);
        assert_eq!(problem.detail.as_deref(), Some("artist not found: 42"));
    }

    #[test]
    fn envelope_problem_uses_fixed_message() {
        let problem = envelope_problem(Status::BadRequest);
        assert_eq!(problem.status, 400);
        assert_eq!(problem.title, "Bad Request");
        assert_eq!(problem.detail.as_deref(), Some("Bad Request"));
    }
}
