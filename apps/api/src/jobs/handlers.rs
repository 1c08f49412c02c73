use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::jobs::recommend::{recommend_jobs, RecommendationRequest, RecommendationResponse};
use crate::state::AppState;

/// POST /api/v1/jobs/recommendations
///
/// Searches every configured job board and returns listings ranked by match
/// score, plus the outcome of each board.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let response = recommend_jobs(
        state.llm.as_ref(),
        &state.job_sources,
        state.config.job_fetch_limit,
        request,
    )
    .await?;

    Ok(Json(response))
}
