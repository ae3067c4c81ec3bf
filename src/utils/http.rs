// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::Result;
use crate::models::HttpConfig;

/// A fetched response body together with its status code.
///
/// Carrying the status instead of failing on it lets each flow apply its own
/// status policy.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub status: StatusCode,
    pub body: String,
}

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a URL and return its body text and status code.
///
/// Only transport-level failures error here; non-success statuses are
/// returned to the caller.
pub async fn fetch_text(client: &Client, url: &str) -> Result<Fetched> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    Ok(Fetched { status, body })
}
