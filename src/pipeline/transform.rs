//! Ranked-article to record transformation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Result;
use crate::models::{PageviewRecord, RankedArticle};

/// Flatten ranked articles into records.
///
/// Input order is preserved and every record carries the same `date` and
/// `retrieved_at`; the capture timestamp is computed once per run by the
/// caller, not per record.
pub fn to_records(
    articles: &[RankedArticle],
    date: NaiveDate,
    retrieved_at: DateTime<Utc>,
) -> Vec<PageviewRecord> {
    articles
        .iter()
        .map(|a| PageviewRecord {
            article: a.article.clone(),
            views: a.views,
            rank: a.rank,
            date,
            retrieved_at,
        })
        .collect()
}

/// Serialize records as line-delimited JSON, one object per line,
/// newline-terminated.
pub fn to_json_lines(records: &[PageviewRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
