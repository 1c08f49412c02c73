//! Adzuna: search API with a free tier. Needs an app id and key.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::jobs::{truncate_chars, JobBoardError, JobListing, JobSource, JobSourceKind};

const ADZUNA_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct AdzunaCredentials {
    pub app_id: String,
    pub app_key: String,
}

#[derive(Debug, Deserialize)]
struct AdzunaResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    company: Option<DisplayName>,
    #[serde(default)]
    location: Option<DisplayName>,
    #[serde(default)]
    redirect_url: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DisplayName {
    #[serde(default)]
    display_name: Option<String>,
}

pub struct AdzunaSource {
    client: Client,
    credentials: Option<AdzunaCredentials>,
    country: String,
    location: String,
}

impl AdzunaSource {
    /// `country` is Adzuna's two-letter market code (e.g. "in"); `location`
    /// is the free-text `where` filter.
    pub fn new(
        client: Client,
        credentials: Option<AdzunaCredentials>,
        country: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credentials,
            country: country.into(),
            location: location.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{ADZUNA_BASE_URL}/{}/search/1", self.country)
    }
}

#[async_trait]
impl JobSource for AdzunaSource {
    fn kind(&self) -> JobSourceKind {
        JobSourceKind::Adzuna
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<JobListing>, JobBoardError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(JobBoardError::NotConfigured("Adzuna credentials"))?;

        let limit_param = limit.to_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("app_id", credentials.app_id.as_str()),
                ("app_key", credentials.app_key.as_str()),
                ("what", query),
                ("where", self.location.as_str()),
                ("results_per_page", limit_param.as_str()),
                ("content-type", "application/json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobBoardError::Status(status.as_u16()));
        }

        let body: AdzunaResponse = response.json().await?;
        Ok(into_listings(body))
    }
}

fn into_listings(body: AdzunaResponse) -> Vec<JobListing> {
    body.results
        .into_iter()
        .map(|job| JobListing {
            source: JobSourceKind::Adzuna,
            title: job.title.unwrap_or_else(|| "N/A".to_string()),
            company: display_name(job.company),
            location: display_name(job.location),
            url: job.redirect_url.unwrap_or_default(),
            tags: None,
            description: Some(truncate_chars(
                job.description.as_deref().unwrap_or_default(),
                DESCRIPTION_PREVIEW_CHARS,
            )),
        })
        .collect()
}

fn display_name(field: Option<DisplayName>) -> String {
    field
        .and_then(|f| f.display_name)
        .unwrap_or_else(|| "N/A".to_string())
}
