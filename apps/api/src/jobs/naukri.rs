//! Naukri: no public API; listings come from an Apify scraper actor run
//! synchronously. Item shapes vary between actor versions, so fields are read
//! leniently from raw JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::jobs::{JobBoardError, JobListing, JobSource, JobSourceKind};

const APIFY_BASE_URL: &str = "https://api.apify.com/v2/acts";
pub const NAUKRI_ACTOR_ID: &str = "alpcnRV9YI9lYVPWk";
/// Synchronous actor runs scrape before answering.
pub const ACTOR_TIMEOUT: Duration = Duration::from_secs(120);
const URL_FIELDS: [&str; 4] = ["url", "jobUrl", "link", "jobLink"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActorInput<'a> {
    keyword: &'a str,
    max_jobs: usize,
    freshness: &'a str,
    sort_by: &'a str,
    experience: &'a str,
}

pub struct NaukriSource {
    client: Client,
    api_token: Option<String>,
}

impl NaukriSource {
    /// Pass a client built with `ACTOR_TIMEOUT`; the board default is too short.
    pub fn new(client: Client, api_token: Option<String>) -> Self {
        Self { client, api_token }
    }
}

#[async_trait]
impl JobSource for NaukriSource {
    fn kind(&self) -> JobSourceKind {
        JobSourceKind::Naukri
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<JobListing>, JobBoardError> {
        let token = self
            .api_token
            .as_deref()
            .ok_or(JobBoardError::NotConfigured("Apify token"))?;

        let input = ActorInput {
            keyword: query,
            max_jobs: limit,
            freshness: "all",
            sort_by: "relevance",
            experience: "all",
        };

        let response = self
            .client
            .post(format!(
                "{APIFY_BASE_URL}/{NAUKRI_ACTOR_ID}/run-sync-get-dataset-items"
            ))
            .query(&[("token", token)])
            .json(&input)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobBoardError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let items = body
            .as_array()
            .ok_or_else(|| JobBoardError::Parse("dataset items are not an array".to_string()))?;

        Ok(items.iter().take(limit).map(into_listing).collect())
    }
}

fn into_listing(item: &Value) -> JobListing {
    let text = |key: &str| {
        item.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let url = URL_FIELDS
        .iter()
        .find_map(|key| text(*key))
        .unwrap_or_default();

    let tags = item.get("tagsAndSkills").and_then(|v| match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(values) => {
            let joined = values
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    });

    JobListing {
        source: JobSourceKind::Naukri,
        title: text("title").unwrap_or_else(|| "N/A".to_string()),
        company: text("companyName").unwrap_or_else(|| "N/A".to_string()),
        location: text("location").unwrap_or_else(|| "N/A".to_string()),
        url,
        tags,
        description: text("jobDescription"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_url_falls_back_through_known_fields() {
        let item = json!({"title": "SDE", "jobLink": "https://naukri.com/x", "link": ""});
        assert_eq!(into_listing(&item).url, "https://naukri.com/x");

        let item = json!({"url": "https://naukri.com/a", "jobUrl": "https://naukri.com/b"});
        assert_eq!(into_listing(&item).url, "https://naukri.com/a");
    }

    #[test]
    fn test_reads_standard_fields() {
        let item = json!({
            "title": "Python Developer",
            "companyName": "TCS",
            "location": "Pune",
            "jobUrl": "https://naukri.com/job/1",
            "tagsAndSkills": "python,django,rest",
            "jobDescription": "Build services"
        });
        let listing = into_listing(&item);
        assert_eq!(listing.title, "Python Developer");
        assert_eq!(listing.company, "TCS");
        assert_eq!(listing.location, "Pune");
        assert_eq!(listing.tags.as_deref(), Some("python,django,rest"));
        assert_eq!(listing.description.as_deref(), Some("Build services"));
    }

    #[test]
    fn test_array_tags_joined() {
        let item = json!({"tagsAndSkills": ["java", "spring"]});
        assert_eq!(into_listing(&item).tags.as_deref(), Some("java, spring"));
    }

    #[test]
    fn test_empty_item_defaults() {
        let listing = into_listing(&json!({}));
        assert_eq!(listing.title, "N/A");
        assert_eq!(listing.url, "");
        assert!(listing.tags.is_none());
        assert!(listing.description.is_none());
    }

    #[test]
    fn test_actor_input_uses_camel_case() {
        let input = ActorInput {
            keyword: "rust",
            max_jobs: 30,
            freshness: "all",
            sort_by: "relevance",
            experience: "all",
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["maxJobs"], 30);
        assert_eq!(json["sortBy"], "relevance");
    }

    #[tokio::test]
    async fn test_missing_token_reports_not_configured() {
        let source = NaukriSource::new(Client::new(), None);
        let err = source.fetch("rust", 10).await.unwrap_err();
        assert!(matches!(err, JobBoardError::NotConfigured(_)));
    }
}
