use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jetfuel_contact::RelayError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid JSON body")]
    InvalidJson,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingField(_)
            | AppError::InvalidJson
            | AppError::Relay(RelayError::MissingFields) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Relay(RelayError::NotConfigured | RelayError::SendFailed) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
        AppError::InvalidJson
    }
}

/// Errors render as `{ "error": "<message>" }`. Relay messages are already
/// generic, transport details are logged where they happen.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
