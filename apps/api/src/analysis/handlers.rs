use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    calculate_ats_score, calculate_job_match_score, estimate_salary_range, extract_skills,
    generate_interview_tips, AtsResult, SalaryBand, SkillSet, DEFAULT_LOCATION,
};

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct SkillsRequest {
    pub text: String,
    #[serde(default)]
    pub ai_text: Option<String>,
}

#[derive(Deserialize)]
pub struct MatchRequest {
    pub skills: Vec<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub match_score: u32,
}

#[derive(Deserialize)]
pub struct SalaryRequest {
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Deserialize)]
pub struct TipsRequest {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Serialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

/// POST /api/v1/scores/ats
pub async fn handle_ats_score(Json(req): Json<ScoreRequest>) -> Json<AtsResult> {
    Json(calculate_ats_score(&req.text))
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(Json(req): Json<SkillsRequest>) -> Json<SkillSet> {
    Json(extract_skills(&req.text, req.ai_text.as_deref()))
}

/// POST /api/v1/jobs/match-score
pub async fn handle_match_score(Json(req): Json<MatchRequest>) -> Json<MatchResponse> {
    let match_score = calculate_job_match_score(&req.skills, &req.title, &req.description);
    Json(MatchResponse { match_score })
}

/// POST /api/v1/salary/estimate
pub async fn handle_salary_estimate(Json(req): Json<SalaryRequest>) -> Json<SalaryBand> {
    let location = req.location.as_deref().unwrap_or(DEFAULT_LOCATION);
    Json(estimate_salary_range(&req.title, location))
}

/// POST /api/v1/interview/tips
pub async fn handle_interview_tips(Json(req): Json<TipsRequest>) -> Json<TipsResponse> {
    Json(TipsResponse {
        tips: generate_interview_tips(&req.title, &req.skills),
    })
}
