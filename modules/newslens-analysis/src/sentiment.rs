use std::collections::HashSet;
use std::sync::LazyLock;

use newslens_common::{SentimentLabel, SentimentResult};

use crate::tokens::tokenize;

// Small news-register lexicons. Scoring only needs direction, not nuance,
// so each list stays deliberately compact.
static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "advance", "agreement", "approval", "benefit", "boost", "breakthrough",
        "celebrate", "cooperation", "effective", "gain", "good", "great", "growth",
        "hope", "hopeful", "improve", "improved", "improvement", "optimism", "peace",
        "positive", "progress", "promising", "prosperity", "recovery", "relief",
        "resolve", "safe", "stability", "strong", "succeed", "success", "successful",
        "support", "surge", "thrive", "victory", "welcome", "win",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "accident", "attack", "bad", "blame", "catastrophe", "collapse", "concern",
        "conflict", "crash", "crisis", "damage", "danger", "dangerous", "dead",
        "death", "decline", "defeat", "deficit", "disaster", "dispute", "fail",
        "failed", "failure", "fear", "fraud", "harm", "injured", "kill", "killed",
        "lawsuit", "loss", "outbreak", "panic", "poor", "protest", "recession",
        "risk", "scandal", "shortage", "slump", "threat", "tragedy", "violence",
        "warning", "weak", "worse", "worst",
    ]
    .into_iter()
    .collect()
});

/// Score at or beyond which a text stops being labeled neutral.
const LABEL_THRESHOLD: f64 = 0.0125;

/// Lexicon-based sentiment over word tokens. Score is
/// (positive hits − negative hits) / token count, clamped to [-1, 1].
/// Deterministic, and defined for any input: empty text is neutral.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return SentimentResult::neutral();
    }

    let mut positive = 0i64;
    let mut negative = 0i64;
    for token in &tokens {
        if POSITIVE_WORDS.contains(token.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(token.as_str()) {
            negative += 1;
        }
    }

    let score = ((positive - negative) as f64 / tokens.len() as f64).clamp(-1.0, 1.0);
    let label = if score >= LABEL_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= -LABEL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    SentimentResult { label, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        let result = analyze_sentiment("");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn positive_words_dominate() {
        let result = analyze_sentiment("A great victory and a welcome breakthrough");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score > 0.0);
    }

    #[test]
    fn negative_words_dominate() {
        let result = analyze_sentiment("Crisis and disaster follow the deadly crash");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.score < 0.0);
    }

    #[test]
    fn mixed_text_stays_neutral() {
        let result = analyze_sentiment(
            "The council reported a gain in one district and a loss in another \
             while most figures for the quarter stayed flat overall",
        );
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn deterministic_for_same_input() {
        let text = "Protests continue amid fears of a wider conflict";
        assert_eq!(analyze_sentiment(text), analyze_sentiment(text));
    }

    #[test]
    fn score_is_bounded() {
        let result = analyze_sentiment("win win win win");
        assert!(result.score <= 1.0);
        assert_eq!(result.label, SentimentLabel::Positive);
    }
}
