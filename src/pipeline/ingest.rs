//! Pageview ingestion flow.
//!
//! Strictly sequential: fetch the report, persist the raw body locally and
//! to S3, then transform it into JSON-line records and persist those the
//! same way. The raw body is written before parsing, so a malformed
//! response still leaves the raw artifact behind.

use chrono::{NaiveDate, Utc};
use log::{info, warn};
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{Config, TopPageviews};
use crate::pipeline::transform;
use crate::storage::{LocalStore, S3Store, paths};
use crate::utils::http::{self, Fetched};

/// Summary of an ingestion run.
#[derive(Debug)]
pub struct IngestReport {
    pub date: NaiveDate,
    pub record_count: usize,
    pub raw_location: String,
    pub views_location: String,
}

/// Apply the ingestion status policy to a fetched response.
///
/// The default is to abort on a non-success status. With
/// `ignore_http_errors` the bad status is only logged and the body is
/// handed on to the parser anyway, matching the legacy script.
pub fn check_status(url: &str, fetched: &Fetched, ignore_http_errors: bool) -> Result<()> {
    if fetched.status.is_success() {
        return Ok(());
    }
    if ignore_http_errors {
        warn!(
            "Non-OK status {} from {}; continuing anyway. Body: {}",
            fetched.status, url, fetched.body
        );
        return Ok(());
    }
    Err(AppError::status(url, fetched.status.as_u16()))
}

/// Run the full ingestion flow for one report date.
pub async fn run_ingest(
    config: &Config,
    client: &Client,
    local: &LocalStore,
    s3: &S3Store,
    date: NaiveDate,
) -> Result<IngestReport> {
    let url = config.ingest.api_url(date);
    info!("Requesting pageviews report: {}", url);

    let fetched = http::fetch_text(client, &url).await?;
    info!("Report response status: {}", fetched.status);
    check_status(&url, &fetched, config.ingest.ignore_http_errors)?;

    // Persist the verbatim response body first.
    let raw_path = local.write_text(&paths::raw_local_path(date), &fetched.body).await?;
    info!("Saved raw views to {}", raw_path.display());

    s3.ensure_bucket().await?;

    let raw_key = paths::raw_object_key(date);
    s3.upload_file(&raw_path, &raw_key).await?;
    s3.verify(&raw_key).await?;

    // Parse and flatten, stamping every record with one capture timestamp.
    let report = TopPageviews::parse(&fetched.body)?;
    let retrieved_at = Utc::now();
    let records = transform::to_records(report.top_articles(), date, retrieved_at);
    let json_lines = transform::to_json_lines(&records)?;

    let views_path = local.write_text(&paths::views_local_path(date), &json_lines).await?;
    info!("Saved {} records to {}", records.len(), views_path.display());

    let views_key = paths::views_object_key(date);
    s3.upload_file(&views_path, &views_key).await?;
    s3.verify(&views_key).await?;

    Ok(IngestReport {
        date,
        record_count: records.len(),
        raw_location: format!("s3://{}/{}", s3.bucket(), raw_key),
        views_location: format!("s3://{}/{}", s3.bucket(), views_key),
    })
}
