//! PDF text extraction via `pdf-extract`.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts plain text from PDF bytes.
///
/// Rejects non-PDF payloads with 400 and PDFs that yield no text (typically
/// scanned images) with 422. Parser panics on malformed input are caught by
/// the blocking task and reported as 422 as well.
pub async fn extract_text(bytes: Bytes) -> Result<String, AppError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::Validation(
            "uploaded file is not a PDF".to_string(),
        ));
    }

    let size = bytes.len();
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            warn!("PDF extraction task failed: {e}");
            AppError::UnprocessableEntity("the PDF could not be parsed".to_string())
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("the PDF could not be parsed: {e}")))?;

    let text = normalize_whitespace(&extracted);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "the PDF contains no extractable text".to_string(),
        ));
    }

    debug!(
        "Extracted {} chars ({} words) from {} byte PDF",
        text.len(),
        word_count(&text),
        size
    );
    Ok(text)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trims trailing whitespace on each line and collapses runs of blank lines
/// to a single blank line.
fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        lines.push(if line.trim().is_empty() { "" } else { line });
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
