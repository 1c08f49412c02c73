//! Recommendation pipeline: search keywords → every job board → ranked listings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::job_match::{rank_jobs, MatchedJob};
use crate::errors::AppError;
use crate::insights::suggest_search_keywords;
use crate::jobs::{fetch_all, JobSource, JobSourceKind, SourceReport, SourceStatus};
use crate::llm_client::LanguageModel;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Candidate skills used for match scoring.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Comma-separated search terms. Derived from `summary` when absent.
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Per-board outcome without the listings themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub source: JobSourceKind,
    pub status: &'static str,
    pub listing_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&SourceReport> for SourceSummary {
    fn from(report: &SourceReport) -> Self {
        let (status, reason) = match &report.status {
            SourceStatus::Ok { .. } => ("ok", None),
            SourceStatus::NotConfigured { reason } => ("not_configured", Some(reason.clone())),
            SourceStatus::Failed { reason } => ("failed", Some(reason.clone())),
        };
        Self {
            source: report.source,
            status,
            listing_count: report.listings().len(),
            reason,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub keywords: String,
    pub jobs: Vec<MatchedJob>,
    pub sources: Vec<SourceSummary>,
    /// True when no board returned any listing; see `sources` for why.
    pub no_results: bool,
}

pub async fn recommend_jobs(
    llm: &dyn LanguageModel,
    sources: &[Arc<dyn JobSource>],
    limit: usize,
    request: RecommendationRequest,
) -> Result<RecommendationResponse, AppError> {
    let keywords = resolve_keywords(llm, &request).await?;
    info!("Searching job boards for: {keywords}");

    let reports = fetch_all(sources, &keywords, limit).await;
    let summaries: Vec<SourceSummary> = reports.iter().map(SourceSummary::from).collect();

    let listings = reports
        .into_iter()
        .flat_map(|report| match report.status {
            SourceStatus::Ok { listings } => listings,
            _ => Vec::new(),
        })
        .collect();

    let jobs = rank_jobs(&request.skills, listings);
    let no_results = jobs.is_empty();

    Ok(RecommendationResponse {
        keywords,
        jobs,
        sources: summaries,
        no_results,
    })
}

async fn resolve_keywords(
    llm: &dyn LanguageModel,
    request: &RecommendationRequest,
) -> Result<String, AppError> {
    if let Some(keywords) = request
        .keywords
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
    {
        return Ok(keywords.to_string());
    }

    match request.summary.as_deref().map(str::trim) {
        Some(summary) if !summary.is_empty() => {
            let keywords = suggest_search_keywords(llm, summary).await?;
            if keywords.is_empty() {
                return Err(AppError::Llm("model returned no search keywords".to_string()));
            }
            Ok(keywords)
        }
        _ => Err(AppError::Validation(
            "either keywords or summary is required".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::jobs::test_support::{listing, StubSource};
    use crate::jobs::JobBoardError;
    use crate::llm_client::LlmError;

    struct KeywordModel;

    #[async_trait]
    impl LanguageModel for KeywordModel {
        async fn complete(&self, _: &str, _: &str, _: u32) -> Result<String, LlmError> {
            Ok("Rust Engineer,\nBackend Developer".to_string())
        }
    }

    fn boards() -> Vec<Arc<dyn JobSource>> {
        vec![
            Arc::new(StubSource {
                kind: JobSourceKind::RemoteOk,
                outcome: || {
                    Ok(vec![
                        listing(JobSourceKind::RemoteOk, "Marketing Manager"),
                        listing(JobSourceKind::RemoteOk, "Rust Backend Engineer"),
                    ])
                },
            }),
            Arc::new(StubSource {
                kind: JobSourceKind::Naukri,
                outcome: || Err(JobBoardError::Status(500)),
            }),
        ]
    }

    fn request(keywords: Option<&str>, summary: Option<&str>) -> RecommendationRequest {
        RecommendationRequest {
            skills: vec!["rust".to_string(), "backend".to_string()],
            keywords: keywords.map(String::from),
            summary: summary.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_explicit_keywords_skip_model_and_rank_jobs() {
        let response = recommend_jobs(&KeywordModel, &boards(), 30, request(Some(" rust "), None))
            .await
            .unwrap();

        assert_eq!(response.keywords, "rust");
        assert_eq!(response.jobs[0].listing.title, "Rust Backend Engineer");
        assert_eq!(response.jobs[0].match_score, 100);
        assert_eq!(response.jobs[1].match_score, 0);
        assert!(!response.no_results);
    }

    #[tokio::test]
    async fn test_keywords_derived_from_summary() {
        let response = recommend_jobs(
            &KeywordModel,
            &boards(),
            30,
            request(None, Some("Backend engineer with Rust")),
        )
        .await
        .unwrap();
        assert_eq!(response.keywords, "Rust Engineer,Backend Developer");
    }

    #[tokio::test]
    async fn test_source_summaries_distinguish_failure() {
        let response = recommend_jobs(&KeywordModel, &boards(), 30, request(Some("rust"), None))
            .await
            .unwrap();
        assert_eq!(response.sources.len(), 2);
        assert_eq!(response.sources[0].status, "ok");
        assert_eq!(response.sources[0].listing_count, 2);
        assert_eq!(response.sources[1].status, "failed");
        assert!(response.sources[1].reason.as_deref().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_missing_keywords_and_summary_is_validation_error() {
        let err = recommend_jobs(&KeywordModel, &boards(), 30, request(Some("  "), None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_no_listings_sets_flag() {
        let empty: Vec<Arc<dyn JobSource>> = vec![Arc::new(StubSource {
            kind: JobSourceKind::Adzuna,
            outcome: || Err(JobBoardError::NotConfigured("Adzuna credentials")),
        })];
        let response = recommend_jobs(&KeywordModel, &empty, 30, request(Some("rust"), None))
            .await
            .unwrap();
        assert!(response.no_results);
        assert_eq!(response.sources[0].status, "not_configured");
    }

    #[tokio::test]
    async fn test_all_boards_failing_sets_flag() {
        let failing: Vec<Arc<dyn JobSource>> = vec![Arc::new(StubSource {
            kind: JobSourceKind::RemoteOk,
            outcome: || Err(JobBoardError::Status(502)),
        })];
        let response = recommend_jobs(&KeywordModel, &failing, 30, request(Some("rust"), None))
            .await
            .unwrap();
        assert!(response.no_results);
        assert_eq!(response.sources[0].status, "failed");
    }
}
