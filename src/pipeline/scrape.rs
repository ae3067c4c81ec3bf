//! Article scraping flow.
//!
//! Fetches one article page and extracts the text of every paragraph
//! element in document order. A non-success status aborts the run before
//! any HTML is parsed.

use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::utils::http;

/// Extract the trimmed text of all `<p>` elements, joined by newlines.
///
/// Paragraphs are kept in document order; empty paragraphs stay in as empty
/// lines, nothing is deduplicated.
pub fn extract_paragraphs(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").map_err(|e| AppError::selector("p", e))?;

    let texts: Vec<String> = document
        .select(&selector)
        .map(|element| {
            element
                .text()
                .collect::<Vec<_>>()
                .join("")
                .trim()
                .to_string()
        })
        .collect();

    Ok(texts.join("\n"))
}

/// Fetch an article page and return its extracted paragraph text.
pub async fn run_scrape(client: &Client, url: &str) -> Result<String> {
    log::info!("Fetching article from {}", url);
    let fetched = http::fetch_text(client, url).await?;

    if !fetched.status.is_success() {
        return Err(AppError::status(url, fetched.status.as_u16()));
    }

    log::info!("Fetched {} bytes, extracting paragraphs", fetched.body.len());
    extract_paragraphs(&fetched.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpConfig;
    use crate::utils::http::create_client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn extracts_paragraphs_in_document_order() {
        let html = r#"
            <html><body>
                <h1>Headline</h1>
                <p>First paragraph.</p>
                <div><p>  Nested <b>second</b> paragraph. </p></div>
                <p>Third.</p>
            </body></html>
        "#;

        let text = extract_paragraphs(html).unwrap();
        assert_eq!(
            text,
            "First paragraph.\nNested second paragraph.\nThird."
        );
    }

    #[test]
    fn keeps_empty_paragraphs() {
        let html = "<p>one</p><p></p><p>two</p>";
        assert_eq!(extract_paragraphs(html).unwrap(), "one\n\ntwo");
    }

    #[test]
    fn no_paragraphs_yields_empty_string() {
        assert_eq!(extract_paragraphs("<div>nothing</div>").unwrap(), "");
    }

    #[tokio::test]
    async fn aborts_on_non_success_before_parsing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<p>gone</p>"))
            .mount(&server)
            .await;

        let client = create_client(&HttpConfig::default()).unwrap();
        let err = run_scrape(&client, &server.uri()).await.unwrap_err();

        match &err {
            AppError::Status { status, .. } => assert_eq!(*status, 404),
            other => panic!("expected status error, got {other}"),
        }
        // the error message must name the status code
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn returns_article_text_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><p>Lead.</p><p>Body.</p></html>"),
            )
            .mount(&server)
            .await;

        let client = create_client(&HttpConfig::default()).unwrap();
        let text = run_scrape(&client, &server.uri()).await.unwrap();
        assert_eq!(text, "Lead.\nBody.");
    }
}
