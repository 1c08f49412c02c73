//! PDF export through the Typst CLI.

use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::report::typst::render_source;
use crate::report::AnalysisReport;

const COMPILE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ReportRenderer {
    typst_bin: String,
}

impl ReportRenderer {
    pub fn new(typst_bin: impl Into<String>) -> Self {
        Self {
            typst_bin: typst_bin.into(),
        }
    }

    /// Compiles `report` in a scratch directory and returns the PDF bytes.
    /// The directory is removed when this returns.
    pub async fn render_pdf(&self, report: &AnalysisReport) -> Result<Vec<u8>, AppError> {
        let workdir = tempfile::tempdir()
            .map_err(|e| AppError::Render(format!("Failed to create scratch directory: {e}")))?;
        let source_path = workdir.path().join("main.typ");
        let output_path = workdir.path().join("report.pdf");

        tokio::fs::write(&source_path, render_source(report))
            .await
            .map_err(|e| AppError::Render(format!("Failed to write Typst source: {e}")))?;

        let mut cmd = Command::new(&self.typst_bin);
        cmd.arg("compile")
            .arg(&source_path)
            .arg(&output_path)
            .kill_on_drop(true);

        let output = tokio::time::timeout(COMPILE_TIMEOUT, cmd.output())
            .await
            .map_err(|_| AppError::Render("Typst compilation timed out".to_string()))?
            .map_err(|e| {
                AppError::Render(format!("Failed to execute {}: {e}", self.typst_bin))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Render(format!(
                "Typst compilation failed: stderr={stderr}"
            )));
        }

        let pdf = tokio::fs::read(&output_path)
            .await
            .map_err(|e| AppError::Render(format!("Failed to read generated PDF: {e}")))?;

        debug!("Typst output: {} bytes", pdf.len());
        info!("Rendered report {} to PDF", report.id);
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;

    #[tokio::test]
    async fn test_missing_binary_is_render_error() {
        let renderer = ReportRenderer::new("/nonexistent/typst-binary");
        let report = build_report("jane@example.com", None, None);
        let err = renderer.render_pdf(&report).await.unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }

    #[tokio::test]
    async fn test_failing_compiler_is_render_error() {
        // `false` exits non-zero without reading its arguments.
        let renderer = ReportRenderer::new("false");
        let report = build_report("jane@example.com", None, None);
        let err = renderer.render_pdf(&report).await.unwrap_err();
        assert!(matches!(err, AppError::Render(msg) if msg.contains("compilation failed")));
    }
}
