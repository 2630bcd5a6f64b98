use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_typed_multipart::{FieldData, TryFromMultipart, TypedMultipart};
use bytes::Bytes;
use ingestion::pdf_ingestion::{extract_pdf_text, require_pdf_filename};
use tracing::info;

use crate::{api_state::ApiState, error::ApiError, routes::IngestResponse};

const PDF_STORED_MESSAGE: &str = "PDF content processed and stored successfully.";

#[derive(Debug, TryFromMultipart)]
pub struct PdfUploadParams {
    #[form_data(limit = "unlimited")]
    pub file: FieldData<Bytes>,
}

pub async fn process_pdf(
    State(state): State<ApiState>,
    TypedMultipart(input): TypedMultipart<PdfUploadParams>,
) -> Result<impl IntoResponse, ApiError> {
    let file_name = input.file.metadata.file_name.clone();
    info!(
        file_name = ?file_name,
        bytes = input.file.contents.len(),
        "Received PDF ingestion request"
    );

    require_pdf_filename(file_name.as_deref())
        .map_err(|err| ApiError::ValidationError(format!("Error processing PDF: {err}")))?;

    let text = extract_pdf_text(input.file.contents.to_vec())
        .await
        .map_err(|err| ApiError::ValidationError(format!("Error processing PDF: {err}")))?;

    let chat_id = state.store.insert(text).await;
    info!(%chat_id, "PDF content stored");

    Ok((
        StatusCode::OK,
        Json(IngestResponse {
            chat_id,
            message: PDF_STORED_MESSAGE.to_string(),
        }),
    ))
}
