use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::api_state::ApiState;

/// Readiness probe: reports the in-memory store as the only dependency.
pub async fn ready(State(state): State<ApiState>) -> impl IntoResponse {
    let documents = state.store.len().await;

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "checks": { "store": "ok" },
            "documents": documents
        })),
    )
}
