use axum::{Json, body::Bytes, extract::State};
use jetfuel_contact::ContactSubmission;
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState};

/// POST /api/contact - relay a contact form submission by email
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let submission = ContactSubmission::from_body(&body);

    app_state.relay.relay(submission).await?;

    Ok(Json(json!({ "ok": true })))
}

/// Any other method on /api/contact. The body is never read.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
