// src/models/mod.rs

//! Domain models for the ingestion and scraping flows.

mod config;
mod pageviews;

// Re-export all public types
pub use config::{Config, HttpConfig, IngestConfig, ScrapeConfig, StorageConfig};
pub use pageviews::{PageviewItem, PageviewRecord, RankedArticle, TopPageviews};
