use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::warn;

use newslens_common::{AnalyzeRequest, NewsLensError};

use crate::AppState;

/// Map a pipeline error to the status it surfaces with. The body shape is
/// always `{"error": "<message>"}`.
fn error_status(err: &NewsLensError) -> StatusCode {
    match err {
        NewsLensError::InvalidRequest | NewsLensError::Extraction(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn api_analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    match state.pipeline.analyze(&body).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            warn!(error = %e, "Analysis request failed");
            (
                error_status(&e),
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_bad_request() {
        assert_eq!(
            error_status(&NewsLensError::InvalidRequest),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn extraction_failure_maps_to_bad_request() {
        assert_eq!(
            error_status(&NewsLensError::Extraction("timeout".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn retrieval_failure_maps_to_server_error() {
        assert_eq!(
            error_status(&NewsLensError::Retrieval("503".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
