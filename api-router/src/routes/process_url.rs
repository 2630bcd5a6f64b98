use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use ingestion::url_text_retrieval::extract_text_from_url;
use serde::Deserialize;
use tracing::info;

use crate::{api_state::ApiState, error::ApiError, routes::IngestResponse};

const URL_STORED_MESSAGE: &str = "URL content processed and stored successfully.";

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

pub async fn process_url(
    State(state): State<ApiState>,
    Json(input): Json<UrlRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!(url = %input.url, "Received URL ingestion request");

    let text = extract_text_from_url(&state.http_client, &input.url)
        .await
        .map_err(|err| ApiError::ValidationError(format!("Error processing URL: {err}")))?;

    let chat_id = state.store.insert(text).await;
    info!(%chat_id, "URL content stored");

    Ok((
        StatusCode::OK,
        Json(IngestResponse {
            chat_id,
            message: URL_STORED_MESSAGE.to_string(),
        }),
    ))
}
