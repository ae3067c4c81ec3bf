//! The two run flows: pageview ingestion and article scraping.
//!
//! Each flow is a single linear pass. Pure stages (record transform,
//! paragraph extraction, status policy) live beside the orchestration so
//! they can be tested without network or storage.

pub mod ingest;
pub mod scrape;
pub mod transform;

pub use ingest::{IngestReport, run_ingest};
pub use scrape::run_scrape;
