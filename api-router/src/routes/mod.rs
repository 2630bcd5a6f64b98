use serde::{Deserialize, Serialize};

pub mod chat;
pub mod liveness;
pub mod process_pdf;
pub mod process_url;
pub mod readiness;

/// Response body shared by both ingestion endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestResponse {
    pub chat_id: String,
    pub message: String,
}
