use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::insights::generate_insights;
use crate::report::{build_report, AnalysisReport};
use crate::resume::{extract_text, read_upload};
use crate::state::AppState;

const REPORT_FILE_NAME: &str = "resume_analysis_report.pdf";

#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    #[serde(default)]
    pub target_title: Option<String>,
}

/// POST /api/v1/analysis
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let upload = read_upload(multipart).await?;
    let text = extract_text(upload.file).await?;
    let report = analyze(&state, &text, upload.target_title).await?;
    Ok(Json(report))
}

/// POST /api/v1/analysis/text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text must not be empty".to_string(),
        ));
    }
    let target_title = req
        .target_title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let report = analyze(&state, &req.resume_text, target_title).await?;
    Ok(Json(report))
}

/// POST /api/v1/reports/pdf
pub async fn handle_report_pdf(
    State(state): State<AppState>,
    Json(report): Json<AnalysisReport>,
) -> Result<Response, AppError> {
    let pdf = state.renderer.render_pdf(&report).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

async fn analyze(
    state: &AppState,
    text: &str,
    target_title: Option<String>,
) -> Result<AnalysisReport, AppError> {
    let insights = generate_insights(state.llm.as_ref(), text).await?;
    let report = build_report(text, Some(insights), target_title);
    info!(
        "Analysis {}: ats={} ({}) skills={}",
        report.id,
        report.ats.total_score,
        report.ats.grade.as_str(),
        report.skills.total_count
    );
    Ok(report)
}
