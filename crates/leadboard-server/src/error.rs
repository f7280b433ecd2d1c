use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use leadboard_store::error::{StoreError, StoreErrorKind};
use serde_json::json;
use std::fmt::Display;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Lead not found")]
    NotFound,
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Logs the cause; only `context` reaches the client.
    pub fn internal(context: &'static str, cause: impl Display) -> Self {
        error!(error = %cause, "{context}");
        ApiError::Internal(context)
    }

    pub fn from_store(context: &'static str, err: StoreError) -> Self {
        match err.kind() {
            StoreErrorKind::Core => ApiError::Invalid(err_message(&err)),
            _ => ApiError::internal(context, err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn err_message(err: &StoreError) -> String {
    match err {
        StoreError::Core(core) => core.to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
