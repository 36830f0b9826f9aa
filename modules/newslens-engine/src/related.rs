use tracing::debug;

use newslens_common::{NewsLensError, RelatedArticle};

use crate::traits::RelatedArticleSource;

/// How many candidates we ask the retrieval backend for. The consumer-facing
/// cap applied at assembly is tighter; this bound only keeps the fetch from
/// pulling an unbounded list into memory.
pub const RELATED_CANDIDATE_LIMIT: usize = 25;

/// Fetch a bounded candidate list of related articles for the keywords.
///
/// Retrieval failure is fatal for the request, same policy as the analysis
/// join. An empty keyword set returns an empty list without a backend call —
/// there is no query to run.
pub async fn fetch_related(
    keywords: &[String],
    source: &dyn RelatedArticleSource,
) -> Result<Vec<RelatedArticle>, NewsLensError> {
    if keywords.is_empty() {
        debug!("No topic keywords; skipping related-article lookup");
        return Ok(Vec::new());
    }

    source
        .related(keywords, RELATED_CANDIDATE_LIMIT)
        .await
        .map_err(|e| NewsLensError::Retrieval(e.to_string()))
}
