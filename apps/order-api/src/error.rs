//! # API Error Type
//!
//! What HTTP clients see when an order is rejected.
//!
//! ## Error Flow
//! ```text
//! OrderRequest::decode ── RequestShapeError ──┐
//!                                             ▼
//! OrderDesk::place ──────── OrderError ──► ApiError ──► 400 {"error": "...", "code": "..."}
//! ```
//!
//! Every order failure is a client input error. There is no retry
//! semantics attached to any code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use configurator_core::OrderError;
use serde::Serialize;
use ts_rs::TS;

/// API error body.
///
/// ```json
/// {
///   "error": "Invalid component code: X",
///   "code": "UNKNOWN_COMPONENT"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ApiError {
    /// Human-readable error message
    #[serde(rename = "error")]
    pub message: String,

    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body is not `{"components": [string, ...]}` or the list is empty
    InvalidRequestShape,

    /// A code is not in the catalog
    UnknownComponent,

    /// Two codes share a category
    DuplicateCategory,

    /// A required category is uncovered
    MissingCategories,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidRequestShape
            | ErrorCode::UnknownComponent
            | ErrorCode::DuplicateCategory
            | ErrorCode::MissingCategories => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let code = match &err {
            OrderError::InvalidRequestShape => ErrorCode::InvalidRequestShape,
            OrderError::UnknownComponent(_) => ErrorCode::UnknownComponent,
            OrderError::DuplicateCategory(_) => ErrorCode::DuplicateCategory,
            OrderError::MissingCategories(_) => ErrorCode::MissingCategories,
        };
        ApiError {
            message: err.to_string(),
            code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
