use newslens_common::{AnalysisResponse, BiasLabel, RelatedArticle, SentimentResult};

use crate::dispatch::AnalysisOutcome;

/// Hard cap on related articles exposed to the caller, regardless of how
/// many the fetch stage returned. This is the single place where the
/// output-shaping trim lives.
pub const MAX_RELATED_ARTICLES: usize = 7;

/// Keywords used when the text is too short for topic extraction.
pub const DEFAULT_KEYWORDS: [&str; 3] = ["news", "world", "article"];

const SHORT_TEXT_NOTE: &str =
    "Input is quite short; topic extraction is less reliable on short texts.";

/// Merge the full-pipeline results into the response, trimming the related
/// list to the consumer cap.
pub fn assemble(outcome: AnalysisOutcome, mut related: Vec<RelatedArticle>) -> AnalysisResponse {
    related.truncate(MAX_RELATED_ARTICLES);
    AnalysisResponse {
        keywords: outcome.keywords,
        sentiment: outcome.sentiment,
        bias: outcome.bias,
        related_articles: related,
        note: None,
    }
}

/// The short-text fallback: fixed generic keywords, neutral bias, no related
/// articles, and an explanatory note. Sentiment is the one analysis still
/// trusted on short input, so the computed value is carried through.
pub fn short_text_response(sentiment: SentimentResult) -> AnalysisResponse {
    AnalysisResponse {
        keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        sentiment,
        bias: BiasLabel::Center,
        related_articles: Vec::new(),
        note: Some(SHORT_TEXT_NOTE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newslens_common::SentimentLabel;

    fn article(n: usize) -> RelatedArticle {
        RelatedArticle {
            title: format!("Article {n}"),
            url: format!("https://news.example/{n}"),
            source: None,
            snippet: None,
        }
    }

    fn outcome() -> AnalysisOutcome {
        AnalysisOutcome {
            sentiment: SentimentResult::neutral(),
            bias: BiasLabel::Right,
            keywords: vec!["election".to_string()],
        }
    }

    #[test]
    fn related_list_is_trimmed_to_cap() {
        let related: Vec<_> = (0..20).map(article).collect();
        let resp = assemble(outcome(), related);
        assert_eq!(resp.related_articles.len(), MAX_RELATED_ARTICLES);
        assert_eq!(resp.related_articles[0].title, "Article 0");
    }

    #[test]
    fn short_lists_pass_through_untrimmed() {
        let resp = assemble(outcome(), vec![article(1)]);
        assert_eq!(resp.related_articles.len(), 1);
        assert!(resp.note.is_none());
    }

    #[test]
    fn analysis_fields_come_from_the_outcome() {
        let resp = assemble(outcome(), vec![]);
        assert_eq!(resp.keywords, vec!["election"]);
        assert_eq!(resp.bias, BiasLabel::Right);
    }

    #[test]
    fn fallback_has_fixed_shape_and_note() {
        let sentiment = SentimentResult {
            label: SentimentLabel::Negative,
            score: -0.2,
        };
        let resp = short_text_response(sentiment.clone());
        assert_eq!(resp.keywords, vec!["news", "world", "article"]);
        assert_eq!(resp.bias, BiasLabel::Center);
        assert!(resp.related_articles.is_empty());
        assert_eq!(resp.sentiment, sentiment);
        assert!(resp.note.as_deref().is_some_and(|n| !n.is_empty()));
    }
}
