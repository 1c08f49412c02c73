use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::{extract_text, read_upload, word_count};

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub word_count: usize,
}

/// POST /api/v1/resume/extract
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        "Extracting resume text from {} ({} bytes)",
        upload.file_name.as_deref().unwrap_or("upload"),
        upload.file.len()
    );

    let text = extract_text(upload.file).await?;
    let word_count = word_count(&text);
    Ok(Json(ExtractResponse { text, word_count }))
}
