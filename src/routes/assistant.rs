use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState};

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub context: String,
}

/// POST /api/assistant - ask the project assistant a question
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Json<ActionInput>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(input) = payload?;

    if input.query.trim().is_empty() {
        return Err(AppError::MissingField("query"));
    }

    let reply = app_state
        .assistant
        .reply(&input.query, &input.context)
        .await;

    Ok(Json(json!({ "reply": reply })))
}
