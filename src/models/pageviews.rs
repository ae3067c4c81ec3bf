//! Pageview report models.
//!
//! `TopPageviews` mirrors the shape of the metrics API response; only the
//! fields the pipeline reads are deserialized. `PageviewRecord` is the
//! flattened per-article record written as one JSON line.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parsed top-pageviews API response.
#[derive(Debug, Clone, Deserialize)]
pub struct TopPageviews {
    #[serde(default)]
    pub items: Vec<PageviewItem>,
}

impl TopPageviews {
    /// Parse a raw response body.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The ranked article list of the first report item.
    ///
    /// The API returns exactly one item per project/date; an absent or empty
    /// item list yields an empty slice rather than a panic.
    pub fn top_articles(&self) -> &[RankedArticle] {
        self.items
            .first()
            .map(|item| item.articles.as_slice())
            .unwrap_or_default()
    }
}

/// One report item, holding the ranked article list.
#[derive(Debug, Clone, Deserialize)]
pub struct PageviewItem {
    #[serde(default)]
    pub articles: Vec<RankedArticle>,
}

/// One ranked article as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RankedArticle {
    pub article: String,
    pub views: u64,
    pub rank: u32,
}

/// Flattened pageview record, one per article per run.
///
/// Field order here is the serialization order of each JSON line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageviewRecord {
    pub article: String,
    pub views: u64,
    pub rank: u32,
    pub date: NaiveDate,
    pub retrieved_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_body() {
        let body = r#"{
            "items": [{
                "project": "en.wikipedia",
                "access": "all-access",
                "articles": [
                    {"article": "Main_Page", "views": 4452553, "rank": 1},
                    {"article": "Special:Search", "views": 1234567, "rank": 2}
                ]
            }]
        }"#;

        let parsed = TopPageviews::parse(body).unwrap();
        let articles = parsed.top_articles();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].article, "Main_Page");
        assert_eq!(articles[0].views, 4452553);
        assert_eq!(articles[1].rank, 2);
    }

    #[test]
    fn top_articles_empty_when_no_items() {
        let parsed = TopPageviews::parse(r#"{"items": []}"#).unwrap();
        assert!(parsed.top_articles().is_empty());
    }

    #[test]
    fn parse_rejects_error_body() {
        let body = r#"{"type":"about:blank","title":"Not found.","status":404}"#;
        // An API error body has no ranked articles in it.
        let parsed = TopPageviews::parse(body).unwrap();
        assert!(parsed.top_articles().is_empty());
    }

    #[test]
    fn record_serializes_date_and_offset() {
        let record = PageviewRecord {
            article: "Main_Page".to_string(),
            views: 10,
            rank: 1,
            date: NaiveDate::from_ymd_opt(2023, 10, 21).unwrap(),
            retrieved_at: DateTime::parse_from_rfc3339("2023-10-22T01:02:03Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""date":"2023-10-21""#));
        assert!(json.contains("2023-10-22T01:02:03"));
        // article must serialize first so lines stay schema-stable
        assert!(json.starts_with(r#"{"article":"#));
    }
}
