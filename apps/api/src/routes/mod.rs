pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::jobs::handlers as jobs;
use crate::report::handlers as report;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume intake
        .route("/api/v1/resume/extract", post(resume::handle_extract))
        // Full analysis
        .route("/api/v1/analysis", post(report::handle_analyze_upload))
        .route("/api/v1/analysis/text", post(report::handle_analyze_text))
        .route("/api/v1/reports/pdf", post(report::handle_report_pdf))
        // Individual analyzers
        .route("/api/v1/scores/ats", post(analysis::handle_ats_score))
        .route("/api/v1/skills/extract", post(analysis::handle_extract_skills))
        .route("/api/v1/jobs/match-score", post(analysis::handle_match_score))
        .route("/api/v1/salary/estimate", post(analysis::handle_salary_estimate))
        .route("/api/v1/interview/tips", post(analysis::handle_interview_tips))
        // Job boards
        .route(
            "/api/v1/jobs/recommendations",
            post(jobs::handle_recommendations),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
