use thiserror::Error;

/// Which of the three concurrent analysis operations failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Sentiment,
    Bias,
    Topics,
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStage::Sentiment => write!(f, "sentiment"),
            AnalysisStage::Bias => write!(f, "bias"),
            AnalysisStage::Topics => write!(f, "topics"),
        }
    }
}

/// Error taxonomy for one analysis request. Every variant surfaces to the
/// caller as a single message string; none is retried and none crashes the
/// process.
#[derive(Error, Debug)]
pub enum NewsLensError {
    #[error("Please provide either text or a valid URL.")]
    InvalidRequest,

    #[error("Failed to extract article from URL: {0}")]
    Extraction(String),

    #[error("Analysis failed in {stage} stage: {message}")]
    Analysis {
        stage: AnalysisStage,
        message: String,
    },

    #[error("Failed to retrieve related articles: {0}")]
    Retrieval(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl NewsLensError {
    pub fn analysis(stage: AnalysisStage, source: anyhow::Error) -> Self {
        NewsLensError::Analysis {
            stage,
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_message_is_exact() {
        assert_eq!(
            NewsLensError::InvalidRequest.to_string(),
            "Please provide either text or a valid URL."
        );
    }

    #[test]
    fn extraction_message_carries_cause() {
        let err = NewsLensError::Extraction("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to extract article from URL: connection refused"
        );
    }

    #[test]
    fn analysis_message_names_the_stage() {
        let err = NewsLensError::analysis(AnalysisStage::Topics, anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "Analysis failed in topics stage: boom");
    }
}
