use tracing::info;

use newslens_common::{AnalyzeRequest, NewsLensError};

use crate::traits::ArticleScraper;

/// Resolve a request into raw article text.
///
/// Inline text wins over a URL; the scraper is only invoked when no usable
/// text was supplied. A scrape failure is terminal for the request — it is
/// reported once with its cause and never retried.
pub async fn resolve_text(
    req: &AnalyzeRequest,
    scraper: &dyn ArticleScraper,
) -> Result<String, NewsLensError> {
    if let Some(text) = req.text.as_deref() {
        let text = text.trim();
        if !text.is_empty() {
            return Ok(text.to_string());
        }
    }

    if let Some(url) = req.url.as_deref() {
        let url = url.trim();
        if !url.is_empty() {
            info!(url, "Resolving article text via scrape");
            return scraper
                .extract(url)
                .await
                .map_err(|e| NewsLensError::Extraction(e.to_string()));
        }
    }

    Err(NewsLensError::InvalidRequest)
}
