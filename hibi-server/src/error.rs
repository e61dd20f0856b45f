//! Maps core failures onto HTTP responses at the router boundary.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use hibi_core::StoreError;
use tracing::error;

use crate::templates;

#[derive(Debug)]
pub enum ServerError {
    NotFound(String),
    BadRequest(String),
    Internal(anyhow::Error),
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { date } => Self::NotFound(format!("no entry for {date}")),
            StoreError::Io(err) => Self::Internal(err),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", msg),
            Self::Internal(err) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error",
                    "Something went wrong.".to_string(),
                )
            }
        };
        (status, Html(templates::error_page(title, &message))).into_response()
    }
}
