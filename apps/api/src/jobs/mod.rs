//! Job boards: RemoteOK, Adzuna, and Naukri behind a common `JobSource` trait.
//!
//! Every board is queried independently. A board that fails or is not
//! configured produces a `SourceReport` saying so; it never aborts the others
//! and is never confused with "no jobs found".

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

pub mod adzuna;
pub mod handlers;
pub mod naukri;
pub mod recommend;
pub mod remoteok;

pub use adzuna::AdzunaSource;
pub use naukri::NaukriSource;
pub use remoteok::RemoteOkSource;

const USER_AGENT: &str = concat!("resume-insight-api/", env!("CARGO_PKG_VERSION"));
pub const BOARD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobSourceKind {
    #[serde(rename = "RemoteOK")]
    RemoteOk,
    Adzuna,
    Naukri,
}

impl std::fmt::Display for JobSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobSourceKind::RemoteOk => "RemoteOK",
            JobSourceKind::Adzuna => "Adzuna",
            JobSourceKind::Naukri => "Naukri",
        };
        f.write_str(name)
    }
}

/// A posting as returned by a job board. Read-only to the scoring code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub source: JobSourceKind,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum JobBoardError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("unexpected payload: {0}")]
    Parse(String),
}

#[async_trait]
pub trait JobSource: Send + Sync {
    fn kind(&self) -> JobSourceKind;

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<JobListing>, JobBoardError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    Ok { listings: Vec<JobListing> },
    NotConfigured { reason: String },
    Failed { reason: String },
}

/// Outcome of querying one board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceReport {
    pub source: JobSourceKind,
    #[serde(flatten)]
    pub status: SourceStatus,
}

impl SourceReport {
    fn from_result(source: JobSourceKind, result: Result<Vec<JobListing>, JobBoardError>) -> Self {
        let status = match result {
            Ok(listings) => SourceStatus::Ok { listings },
            Err(e @ JobBoardError::NotConfigured(_)) => SourceStatus::NotConfigured {
                reason: e.to_string(),
            },
            Err(e) => SourceStatus::Failed {
                reason: e.to_string(),
            },
        };
        Self { source, status }
    }

    pub fn listings(&self) -> &[JobListing] {
        match &self.status {
            SourceStatus::Ok { listings } => listings,
            _ => &[],
        }
    }
}

/// Builds the HTTP client shared by the boards.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Queries every board concurrently. Reports come back in `sources` order.
pub async fn fetch_all(
    sources: &[Arc<dyn JobSource>],
    query: &str,
    limit: usize,
) -> Vec<SourceReport> {
    let mut set = JoinSet::new();
    for (index, source) in sources.iter().enumerate() {
        let source = Arc::clone(source);
        let query = query.to_string();
        set.spawn(async move {
            let kind = source.kind();
            let result = source.fetch(&query, limit).await;
            (index, SourceReport::from_result(kind, result))
        });
    }

    let mut slots: Vec<Option<SourceReport>> = vec![None; sources.len()];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, report)) => slots[index] = Some(report),
            Err(e) => warn!("Job board task aborted: {e}"),
        }
    }

    let reports: Vec<SourceReport> = slots
        .into_iter()
        .zip(sources)
        .map(|(slot, source)| {
            slot.unwrap_or_else(|| SourceReport {
                source: source.kind(),
                status: SourceStatus::Failed {
                    reason: "fetch task aborted".to_string(),
                },
            })
        })
        .collect();

    for report in &reports {
        match &report.status {
            SourceStatus::Ok { listings } => {
                info!("{}: {} listings", report.source, listings.len())
            }
            SourceStatus::NotConfigured { reason } => info!("{}: skipped ({reason})", report.source),
            SourceStatus::Failed { reason } => warn!("{}: failed ({reason})", report.source),
        }
    }

    reports
}

/// Truncates to `max_chars` characters, appending "..." when cut.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{listing, StubSource};
    use super::*;

    fn sources() -> Vec<Arc<dyn JobSource>> {
        vec![
            Arc::new(StubSource {
                kind: JobSourceKind::RemoteOk,
                outcome: || {
                    Ok(vec![
                        listing(JobSourceKind::RemoteOk, "Rust Engineer"),
                        listing(JobSourceKind::RemoteOk, "Go Engineer"),
                    ])
                },
            }),
            Arc::new(StubSource {
                kind: JobSourceKind::Adzuna,
                outcome: || Err(JobBoardError::NotConfigured("Adzuna credentials")),
            }),
            Arc::new(StubSource {
                kind: JobSourceKind::Naukri,
                outcome: || Err(JobBoardError::Status(503)),
            }),
        ]
    }

    #[tokio::test]
    async fn test_fetch_all_isolates_failures_and_keeps_order() {
        let reports = fetch_all(&sources(), "rust", 30).await;

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].source, JobSourceKind::RemoteOk);
        assert_eq!(reports[0].listings().len(), 2);
        assert!(matches!(
            reports[1].status,
            SourceStatus::NotConfigured { .. }
        ));
        assert!(reports[1].listings().is_empty());
        match &reports[2].status {
            SourceStatus::Failed { reason } => assert!(reason.contains("503")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_passes_limit() {
        let reports = fetch_all(&sources(), "rust", 1).await;
        assert_eq!(reports[0].listings().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_with_no_sources() {
        assert!(fetch_all(&[], "rust", 10).await.is_empty());
    }

    #[test]
    fn test_source_report_serializes_status_tag() {
        let report = SourceReport::from_result(
            JobSourceKind::Adzuna,
            Err(JobBoardError::NotConfigured("Adzuna credentials")),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source"], "Adzuna");
        assert_eq!(json["status"], "not_configured");
        assert_eq!(json["reason"], "Adzuna credentials is not configured");
    }

    #[test]
    fn test_source_kind_serializes_remoteok_name() {
        assert_eq!(
            serde_json::to_value(JobSourceKind::RemoteOk).unwrap(),
            serde_json::json!("RemoteOK")
        );
        assert_eq!(JobSourceKind::RemoteOk.to_string(), "RemoteOK");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("héllo wörld", 4), "héll...");
    }
}
