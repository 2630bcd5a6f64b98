use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use common::error::AppError;
use relevance::{similarity, RELEVANCE_THRESHOLD, SNIPPET_CHARS};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{api_state::ApiState, error::ApiError};

const NO_RELEVANT_RESPONSE: &str = "Sorry, I couldn't find a relevant response.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub chat_id: String,
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

pub async fn chat(
    State(state): State<ApiState>,
    Json(input): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let content = state
        .store
        .get(&input.chat_id)
        .await
        .ok_or_else(|| AppError::NotFound("Chat ID not found.".to_string()))?;

    let score = similarity(&content, &input.question);
    info!(chat_id = %input.chat_id, score, "Scored chat question");

    let response = if score > RELEVANCE_THRESHOLD {
        let snippet: String = content.chars().take(SNIPPET_CHARS).collect();
        format!("The main idea of the document is: {snippet}...")
    } else {
        NO_RELEVANT_RESPONSE.to_string()
    };

    Ok((StatusCode::OK, Json(ChatResponse { response })))
}
