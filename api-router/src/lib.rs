use api_state::ApiState;
use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use routes::{
    chat::chat, liveness::live, process_pdf::process_pdf, process_url::process_url,
    readiness::ready,
};

pub mod api_state;
pub mod error;
mod routes;

/// Router for the document chat API.
pub fn api_routes<S>(app_state: &ApiState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    Router::new()
        .route("/process_url", post(process_url))
        .route(
            "/process_pdf",
            post(process_pdf).layer(DefaultBodyLimit::max(
                app_state.config.ingest_max_body_bytes,
            )),
        )
        .route("/chat", post(chat))
        .route("/live", get(live))
        .route("/ready", get(ready))
}
