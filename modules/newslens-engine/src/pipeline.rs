use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use newslens_common::{AnalysisResponse, AnalyzeRequest, NewsLensError};

use crate::assemble::{assemble, short_text_response};
use crate::dispatch::run_analysis;
use crate::normalize::normalize;
use crate::related::fetch_related;
use crate::resolver::resolve_text;
use crate::traits::{
    ArticleScraper, BiasClassifier, RelatedArticleSource, SentimentAnalyzer, TopicExtractor,
};

/// Below this many chars of normalized text, topic extraction and bias
/// classification are considered unreliable and the fallback path runs.
pub const SHORT_TEXT_THRESHOLD: usize = 200;

/// Which of the two handling paths a request takes. Decided once per
/// request, right after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PipelinePath {
    ShortTextFallback,
    FullPipeline,
}

impl PipelinePath {
    fn for_text(text: &str) -> Self {
        if text.chars().count() < SHORT_TEXT_THRESHOLD {
            PipelinePath::ShortTextFallback
        } else {
            PipelinePath::FullPipeline
        }
    }
}

/// The orchestrator: resolve → normalize → branch → dispatch → related →
/// assemble. Holds no per-request state; every field is a read-only
/// collaborator, so one instance serves all requests.
pub struct AnalysisPipeline {
    scraper: Arc<dyn ArticleScraper>,
    sentiment: Arc<dyn SentimentAnalyzer>,
    bias: Arc<dyn BiasClassifier>,
    topics: Arc<dyn TopicExtractor>,
    related: Arc<dyn RelatedArticleSource>,
}

impl AnalysisPipeline {
    pub fn new(
        scraper: Arc<dyn ArticleScraper>,
        sentiment: Arc<dyn SentimentAnalyzer>,
        bias: Arc<dyn BiasClassifier>,
        topics: Arc<dyn TopicExtractor>,
        related: Arc<dyn RelatedArticleSource>,
    ) -> Self {
        Self {
            scraper,
            sentiment,
            bias,
            topics,
            related,
        }
    }

    /// Run one request through to a response. Errors are terminal for the
    /// request: nothing here retries, and no failure is papered over with a
    /// partial result.
    pub async fn analyze(&self, req: &AnalyzeRequest) -> Result<AnalysisResponse, NewsLensError> {
        let request_id = Uuid::new_v4();

        let raw = resolve_text(req, self.scraper.as_ref()).await?;
        let text = normalize(&raw);
        let chars = text.chars().count();

        match PipelinePath::for_text(&text) {
            PipelinePath::ShortTextFallback => {
                info!(%request_id, chars, "Short text; using fallback analysis");
                let sentiment = self
                    .sentiment
                    .analyze(&text)
                    .await
                    .map_err(|e| {
                        NewsLensError::analysis(newslens_common::AnalysisStage::Sentiment, e)
                    })?;
                Ok(short_text_response(sentiment))
            }
            PipelinePath::FullPipeline => {
                info!(%request_id, chars, "Running full analysis pipeline");
                let outcome = run_analysis(
                    &text,
                    self.sentiment.as_ref(),
                    self.bias.as_ref(),
                    self.topics.as_ref(),
                )
                .await?;
                let related = fetch_related(&outcome.keywords, self.related.as_ref()).await?;
                Ok(assemble(outcome, related))
            }
        }
    }
}
