//! Error types for the todo HTTP API.
//!
//! [`WebError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todos_core::ActionError;

/// Errors that can occur in the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The request failed action validation. Nothing was mutated.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// The requested item was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A UUID could not be parsed from the request path.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// The request body could not be read as a urlencoded or multipart form.
    #[error("invalid form body: {0}")]
    InvalidForm(String),

    /// The `_method` override field named an unsupported method.
    #[error("unsupported method override: {0}")]
    MethodOverride(String),

    /// `POST /{target}` arrived without a `_method` field.
    #[error("missing `_method` field")]
    MissingMethodOverride,
}

impl WebError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Action(ActionError::NotFound(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Action(_)
            | Self::InvalidUuid(_)
            | Self::InvalidForm(_)
            | Self::MethodOverride(_)
            | Self::MissingMethodOverride => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
