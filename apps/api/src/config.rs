use std::str::FromStr;

use anyhow::{Context, Result};

use crate::jobs::adzuna::AdzunaCredentials;
use crate::llm_client::{LlmConfig, DEFAULT_API_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub llm_model: String,
    pub llm_api_url: String,
    /// Adzuna is skipped (reported as not configured) unless both are set.
    pub adzuna_app_id: Option<String>,
    pub adzuna_app_key: Option<String>,
    pub adzuna_country: String,
    /// Naukri listings come through an Apify actor; skipped without a token.
    pub apify_api_token: Option<String>,
    pub job_fetch_limit: usize,
    pub typst_bin: String,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            llm_model: env_or("LLM_MODEL", DEFAULT_MODEL),
            llm_api_url: env_or("LLM_API_URL", DEFAULT_API_URL),
            adzuna_app_id: optional_env("ADZUNA_APP_ID"),
            adzuna_app_key: optional_env("ADZUNA_APP_KEY"),
            adzuna_country: env_or("ADZUNA_COUNTRY", "in"),
            apify_api_token: optional_env("APIFY_API_TOKEN"),
            job_fetch_limit: parse_env("JOB_FETCH_LIMIT", 30)?,
            typst_bin: env_or("TYPST_BIN", "typst"),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            model: self.llm_model.clone(),
            api_url: self.llm_api_url.clone(),
            ..LlmConfig::new(self.anthropic_api_key.clone())
        }
    }

    /// Both id and key, or nothing.
    pub fn adzuna_credentials(&self) -> Option<AdzunaCredentials> {
        match (&self.adzuna_app_id, &self.adzuna_app_key) {
            (Some(app_id), Some(app_key)) => Some(AdzunaCredentials {
                app_id: app_id.clone(),
                app_key: app_key.clone(),
            }),
            _ => None,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
