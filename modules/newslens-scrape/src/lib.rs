pub mod error;
mod readability;

pub use error::{Result, ScrapeError};

use std::time::Duration;

use tracing::info;

use crate::readability::extract_article_body;

/// Article scraper backed by a plain HTTP GET plus Readability extraction.
/// The timeout bounds the whole fetch; there are no retries — a failed
/// extraction is reported once and left to the caller.
pub struct HttpArticleScraper {
    client: reqwest::Client,
}

impl HttpArticleScraper {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("newslens/0.1")
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Download `url` and return the extracted article body text.
    pub async fn extract(&self, url: &str) -> Result<String> {
        let parsed =
            url::Url::parse(url).map_err(|e| ScrapeError::InvalidUrl(format!("{url}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ScrapeError::InvalidUrl(format!(
                "only http/https URLs are allowed, got {}",
                parsed.scheme()
            )));
        }

        let resp = self.client.get(parsed).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = resp.bytes().await?;
        let body = extract_article_body(&html, Some(url));
        let body = body.trim();
        if body.is_empty() {
            return Err(ScrapeError::EmptyBody(url.to_string()));
        }

        info!(url, chars = body.chars().count(), "Article body extracted");
        Ok(body.to_string())
    }
}
