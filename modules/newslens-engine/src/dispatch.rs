use newslens_common::{AnalysisStage, BiasLabel, NewsLensError, SentimentResult};

use crate::traits::{BiasClassifier, SentimentAnalyzer, TopicExtractor};

/// Joined output of the three concurrent analysis operations, each result
/// bound to its named field rather than to completion order.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub sentiment: SentimentResult,
    pub bias: BiasLabel,
    pub keywords: Vec<String>,
}

/// Run sentiment, bias, and topic extraction concurrently over the same
/// normalized text and wait for all three.
///
/// All-or-nothing: the first failure aborts the whole dispatch, tagged with
/// the stage that failed. The sibling futures are dropped at that point,
/// releasing whatever they held.
pub async fn run_analysis(
    text: &str,
    sentiment: &dyn SentimentAnalyzer,
    bias: &dyn BiasClassifier,
    topics: &dyn TopicExtractor,
) -> Result<AnalysisOutcome, NewsLensError> {
    let (sentiment, bias, keywords) = tokio::try_join!(
        async {
            sentiment
                .analyze(text)
                .await
                .map_err(|e| NewsLensError::analysis(AnalysisStage::Sentiment, e))
        },
        async {
            bias.classify(text)
                .await
                .map_err(|e| NewsLensError::analysis(AnalysisStage::Bias, e))
        },
        async {
            topics
                .topics(text)
                .await
                .map_err(|e| NewsLensError::analysis(AnalysisStage::Topics, e))
        },
    )?;

    Ok(AnalysisOutcome {
        sentiment,
        bias,
        keywords,
    })
}
