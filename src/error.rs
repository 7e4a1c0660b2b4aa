//! Error types
//!
//! `ReorderError` describes why a proposed ordering was rejected by the store.
//! `ApiError` is what the REST and MCP layers report back to callers.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Reasons a proposed ordering is not a permutation of the current ids
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    #[error("expected {expected} ids, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("id {0} appears more than once")]
    DuplicateId(String),

    #[error("id {0} is not on the list")]
    UnknownId(String),
}

/// Errors surfaced by the REST and MCP adapters
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] ReorderError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidOrder(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidArguments(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnknownTool(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidArguments(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(error = %self, "request rejected");
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
