use serde::{Deserialize, Serialize};

// --- Request ---

/// Body of an analysis request. At least one of `text` / `url` must be
/// present and non-blank; when both are given, `text` wins and the URL
/// is never fetched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
    pub url: Option<String>,
}

impl AnalyzeRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            url: None,
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            text: None,
            url: Some(url.into()),
        }
    }
}

// --- Analyzer outputs ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// Output of the sentiment analyzer. The pipeline carries this through to
/// the response without inspecting either field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
        }
    }
}

/// Political-bias classification. Closed set; `center` is the default used
/// on the short-text path where classification is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasLabel {
    Left,
    #[default]
    Center,
    Right,
}

impl std::fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BiasLabel::Left => write!(f, "left"),
            BiasLabel::Center => write!(f, "center"),
            BiasLabel::Right => write!(f, "right"),
        }
    }
}

// --- Related articles ---

/// One related article from the retrieval backend. The pipeline only ever
/// counts and trims these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

// --- Response ---

/// The assembled analysis. Built once per request and never mutated after
/// assembly. `note` is present only on the short-text fallback path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub keywords: Vec<String>,
    pub sentiment: SentimentResult,
    pub bias: BiasLabel,
    pub related_articles: Vec<RelatedArticle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BiasLabel::Center).unwrap(), "\"center\"");
        assert_eq!(serde_json::to_string(&BiasLabel::Left).unwrap(), "\"left\"");
    }

    #[test]
    fn bias_default_is_center() {
        assert_eq!(BiasLabel::default(), BiasLabel::Center);
    }

    #[test]
    fn note_omitted_when_absent() {
        let resp = AnalysisResponse {
            keywords: vec!["budget".to_string()],
            sentiment: SentimentResult::neutral(),
            bias: BiasLabel::Center,
            related_articles: vec![],
            note: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["sentiment"]["label"], "neutral");
    }

    #[test]
    fn note_present_when_set() {
        let resp = AnalysisResponse {
            keywords: vec![],
            sentiment: SentimentResult::neutral(),
            bias: BiasLabel::Center,
            related_articles: vec![],
            note: Some("short input".to_string()),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["note"], "short input");
    }

    #[test]
    fn related_article_optional_fields_omitted() {
        let article = RelatedArticle {
            title: "Title".to_string(),
            url: "https://example.com".to_string(),
            source: None,
            snippet: None,
        };
        let json = serde_json::to_value(&article).unwrap();
        assert!(json.get("source").is_none());
        assert!(json.get("snippet").is_none());
    }

    #[test]
    fn request_deserializes_with_missing_fields() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_none());
        assert!(req.url.is_none());
    }
}
