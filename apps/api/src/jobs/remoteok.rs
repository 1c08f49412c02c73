//! RemoteOK: public feed, no credentials. The whole feed is downloaded and
//! filtered locally against the comma-separated search terms.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::jobs::{JobBoardError, JobListing, JobSource, JobSourceKind};

const REMOTEOK_API_URL: &str = "https://remoteok.com/api";
const MAX_TAGS: usize = 5;

#[derive(Debug, Default, Deserialize)]
struct RemoteOkPosting {
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

pub struct RemoteOkSource {
    client: Client,
    api_url: String,
}

impl RemoteOkSource {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            api_url: REMOTEOK_API_URL.to_string(),
        }
    }
}

#[async_trait]
impl JobSource for RemoteOkSource {
    fn kind(&self) -> JobSourceKind {
        JobSourceKind::RemoteOk
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<JobListing>, JobBoardError> {
        let response = self.client.get(&self.api_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(JobBoardError::Status(status.as_u16()));
        }

        let feed: Vec<serde_json::Value> = response.json().await?;
        debug!("RemoteOK feed returned {} entries", feed.len());
        Ok(filter_feed(feed, query, limit))
    }
}

/// Skips the leading metadata entry, looks at no more than `2 × limit`
/// postings, and keeps those where any search term occurs in the position,
/// company, or tags.
fn filter_feed(feed: Vec<serde_json::Value>, query: &str, limit: usize) -> Vec<JobListing> {
    let terms: Vec<String> = query
        .to_lowercase()
        .split(',')
        .map(|t| t.trim().to_string())
        .collect();

    let mut listings = Vec::new();

    for value in feed.into_iter().skip(1).take(limit.saturating_mul(2)) {
        if listings.len() >= limit {
            break;
        }

        let posting: RemoteOkPosting = match serde_json::from_value(value) {
            Ok(p) => p,
            Err(e) => {
                debug!("Skipping malformed RemoteOK posting: {e}");
                continue;
            }
        };

        let posting_tags = posting.tags.unwrap_or_default();
        let haystack = format!(
            "{} {} {}",
            posting.position.as_deref().unwrap_or_default(),
            posting.company.as_deref().unwrap_or_default(),
            posting_tags.join(" ")
        )
        .to_lowercase();

        if !terms.iter().any(|t| haystack.contains(t.as_str())) {
            continue;
        }

        let tags = (!posting_tags.is_empty()).then(|| {
            posting_tags
                .iter()
                .take(MAX_TAGS)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        });

        listings.push(JobListing {
            source: JobSourceKind::RemoteOk,
            title: posting.position.unwrap_or_else(|| "N/A".to_string()),
            company: posting.company.unwrap_or_else(|| "N/A".to_string()),
            location: "Remote".to_string(),
            url: posting.url.unwrap_or_default(),
            tags,
            description: None,
        });
    }

    listings
}
