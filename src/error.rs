//! Error types for the shopping cart
//!
//! The cart operations themselves never fail. These errors only come from the
//! validating constructors and the outer surfaces (REST, MCP, CLI parsing).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Invalid cost {0}: must be a finite, non-negative number")]
    InvalidCost(f64),

    #[error("Unknown framework: {0}")]
    UnknownFramework(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CartError>;

impl CartError {
    /// HTTP status used when the error reaches the REST surface.
    pub fn status(&self) -> StatusCode {
        match self {
            CartError::InvalidCost(_) | CartError::InvalidArguments(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CartError::UnknownFramework(_) | CartError::UnknownTool(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {}", self);
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
