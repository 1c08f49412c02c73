//! Multipart resume upload: a required `file` part and an optional
//! `target_title` text part. Unknown parts are ignored.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

#[derive(Debug)]
pub struct ResumeUpload {
    pub file: Bytes,
    pub file_name: Option<String>,
    pub target_title: Option<String>,
}

pub async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut file = None;
    let mut file_name = None;
    let mut target_title = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(str::to_string);
                file = Some(field.bytes().await.map_err(multipart_error)?);
            }
            Some("target_title") => {
                let value = field.text().await.map_err(multipart_error)?;
                target_title = Some(value.trim().to_string()).filter(|t| !t.is_empty());
            }
            _ => {}
        }
    }

    let file = file
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("a non-empty `file` part is required".to_string()))?;

    Ok(ResumeUpload {
        file,
        file_name,
        target_title,
    })
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("invalid multipart body: {}", e.body_text()))
}
