// Trait abstractions for the pipeline's five collaborator operations.
//
// The pipeline only ever talks to these seams; the concrete capability
// crates are wired in below (and by the API binary at startup). Mocks for
// all five live in `testing` — no network, no API keys, `cargo test` in
// seconds.

use anyhow::Result;
use async_trait::async_trait;

use newslens_common::{BiasLabel, RelatedArticle, SentimentResult};

// ---------------------------------------------------------------------------
// Scraper
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ArticleScraper: Send + Sync {
    /// Download a URL and return the extracted article body text.
    async fn extract(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl ArticleScraper for newslens_scrape::HttpArticleScraper {
    async fn extract(&self, url: &str) -> Result<String> {
        Ok(self.extract(url).await?)
    }
}

// ---------------------------------------------------------------------------
// Analyzers
// ---------------------------------------------------------------------------

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<SentimentResult>;
}

#[async_trait]
pub trait BiasClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<BiasLabel>;
}

#[async_trait]
pub trait TopicExtractor: Send + Sync {
    /// Ordered topic keywords for the text. May legitimately be empty.
    async fn topics(&self, text: &str) -> Result<Vec<String>>;
}

/// The built-in lexicon analyzers from `newslens-analysis`, one unit struct
/// per seam so each can be swapped out independently.
pub struct BuiltinSentiment;

#[async_trait]
impl SentimentAnalyzer for BuiltinSentiment {
    async fn analyze(&self, text: &str) -> Result<SentimentResult> {
        Ok(newslens_analysis::analyze_sentiment(text))
    }
}

pub struct BuiltinBias;

#[async_trait]
impl BiasClassifier for BuiltinBias {
    async fn classify(&self, text: &str) -> Result<BiasLabel> {
        Ok(newslens_analysis::classify_bias(text))
    }
}

pub struct BuiltinTopics;

#[async_trait]
impl TopicExtractor for BuiltinTopics {
    async fn topics(&self, text: &str) -> Result<Vec<String>> {
        Ok(newslens_analysis::extract_topics(text))
    }
}

// ---------------------------------------------------------------------------
// Related-article retrieval
// ---------------------------------------------------------------------------

#[async_trait]
pub trait RelatedArticleSource: Send + Sync {
    /// Up to `limit` articles related to the keywords.
    async fn related(&self, keywords: &[String], limit: usize) -> Result<Vec<RelatedArticle>>;
}

#[async_trait]
impl RelatedArticleSource for newslens_retrieval::SerperNewsClient {
    async fn related(&self, keywords: &[String], limit: usize) -> Result<Vec<RelatedArticle>> {
        self.related(keywords, limit).await
    }
}
