use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use newslens_common::Config;
use newslens_engine::traits::{BuiltinBias, BuiltinSentiment, BuiltinTopics};
use newslens_engine::AnalysisPipeline;
use newslens_retrieval::SerperNewsClient;
use newslens_scrape::HttpArticleScraper;

mod rest;

pub struct AppState {
    pub pipeline: AnalysisPipeline,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("newslens=info".parse()?))
        .init();

    let config = Config::from_env();

    let scraper = HttpArticleScraper::new(Duration::from_secs(config.scrape_timeout_secs));
    let retrieval = SerperNewsClient::new(&config.serper_api_key);

    let pipeline = AnalysisPipeline::new(
        Arc::new(scraper),
        Arc::new(BuiltinSentiment),
        Arc::new(BuiltinBias),
        Arc::new(BuiltinTopics),
        Arc::new(retrieval),
    );

    let state = Arc::new(AppState { pipeline });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Analysis API
        .route("/analyze", post(rest::api_analyze))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("newslens API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
