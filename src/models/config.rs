//! Application configuration structures.
//!
//! Every value that the run depends on (report date, bucket, region, URLs)
//! lives here as a named field with a default, instead of being scattered
//! through the run sequence as literals.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings shared by both flows
    #[serde(default)]
    pub http: HttpConfig,

    /// Pageview ingestion settings
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Local and object storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Article scraping settings
    #[serde(default)]
    pub scrape: ScrapeConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.ingest.project.trim().is_empty() {
            return Err(AppError::validation("ingest.project is empty"));
        }
        if self.ingest.access.trim().is_empty() {
            return Err(AppError::validation("ingest.access is empty"));
        }
        self.ingest.parse_date()?;
        Url::parse(&self.ingest.endpoint)
            .map_err(|e| AppError::validation(format!("ingest.endpoint is not a URL: {e}")))?;
        if self.storage.bucket.trim().is_empty() {
            return Err(AppError::validation("storage.bucket is empty"));
        }
        if self.storage.region.trim().is_empty() {
            return Err(AppError::validation("storage.region is empty"));
        }
        Url::parse(&self.scrape.article_url)
            .map_err(|e| AppError::validation(format!("scrape.article_url is not a URL: {e}")))?;
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Pageview ingestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Base URL of the top-pageviews metrics endpoint
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Wiki project to report on (e.g. "en.wikipedia")
    #[serde(default = "defaults::project")]
    pub project: String,

    /// Access type segment of the report ("all-access", "desktop", ...)
    #[serde(default = "defaults::access")]
    pub access: String,

    /// Report date in YYYY-MM-DD form
    #[serde(default = "defaults::date")]
    pub date: String,

    /// Continue past a non-success API status and parse the body anyway.
    ///
    /// Off by default; this reproduces the legacy script behavior of logging
    /// the bad status and carrying on.
    #[serde(default)]
    pub ignore_http_errors: bool,
}

impl IngestConfig {
    /// Parse the configured report date.
    pub fn parse_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|e| {
            AppError::validation(format!("ingest.date '{}' is not YYYY-MM-DD: {e}", self.date))
        })
    }

    /// Build the report URL for a date.
    ///
    /// The endpoint expects the date split as YYYY/MM/DD path segments.
    pub fn api_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.project,
            self.access,
            date.format("%Y/%m/%d")
        )
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            project: defaults::project(),
            access: defaults::access(),
            date: defaults::date(),
            ignore_http_errors: false,
        }
    }
}

/// Local directory and S3 bucket settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// S3 bucket receiving the datalake objects
    #[serde(default = "defaults::bucket")]
    pub bucket: String,

    /// Region the bucket is created in when absent
    #[serde(default = "defaults::region")]
    pub region: String,

    /// Root directory for the local file mirror
    #[serde(default = "defaults::data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: defaults::bucket(),
            region: defaults::region(),
            data_dir: defaults::data_dir(),
        }
    }
}

/// Article scraping settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// URL of the article page to scrape
    #[serde(default = "defaults::article_url")]
    pub article_url: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            article_url: defaults::article_url(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "curl/7.68.0".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Ingest defaults
    pub fn endpoint() -> String {
        "https://wikimedia.org/api/rest_v1/metrics/pageviews/top".into()
    }
    pub fn project() -> String {
        "en.wikipedia".into()
    }
    pub fn access() -> String {
        "all-access".into()
    }
    pub fn date() -> String {
        "2023-10-21".into()
    }

    // Storage defaults
    pub fn bucket() -> String {
        "wikilake-views".into()
    }
    pub fn region() -> String {
        "eu-west-1".into()
    }
    pub fn data_dir() -> String {
        "data".into()
    }

    // Scrape defaults
    pub fn article_url() -> String {
        "https://edition.cnn.com/2023/12/06/politics/takeaways-republican-debate".into()
    }
}
