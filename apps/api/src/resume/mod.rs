// Resume intake: multipart upload parsing and PDF text extraction.
// pdf-extract is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod handlers;
pub mod pdf;
pub mod upload;

pub use pdf::{extract_text, word_count};
pub use upload::{read_upload, ResumeUpload};
