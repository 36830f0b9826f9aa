// Serper (Google News) client for related-article lookup.
//
// Responses are cached in memory per query with a TTL, and the candidate
// list handed back is always truncated to the caller's limit. The consumer-
// facing cap on related articles lives in the pipeline, not here.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use newslens_common::RelatedArticle;

/// How long a cached query result stays fresh.
const CACHE_TTL_MINUTES: i64 = 15;

/// Once the cache map grows past this many queries, expired entries are
/// pruned before inserting, keeping the map bounded under churn.
const CACHE_PRUNE_THRESHOLD: usize = 256;

#[derive(Debug, serde::Deserialize)]
struct SerperNewsResponse {
    #[serde(default)]
    news: Vec<SerperNewsResult>,
}

#[derive(Debug, serde::Deserialize)]
struct SerperNewsResult {
    #[serde(default)]
    link: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    snippet: String,
}

struct CacheEntry {
    fetched_at: DateTime<Utc>,
    articles: Vec<RelatedArticle>,
}

impl CacheEntry {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < chrono::Duration::minutes(CACHE_TTL_MINUTES)
    }
}

pub struct SerperNewsClient {
    api_key: String,
    client: reqwest::Client,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl SerperNewsClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Search news for articles related to `keywords`, at most `limit`
    /// results. Repeated queries within the TTL are served from cache.
    pub async fn related(&self, keywords: &[String], limit: usize) -> Result<Vec<RelatedArticle>> {
        let query = keywords.join(" ");

        {
            let cache = self.cache.lock().await;
            if let Some(entry) = cache.get(&query) {
                if entry.is_fresh(Utc::now()) {
                    debug!(query, count = entry.articles.len(), "Related-article cache hit");
                    let mut articles = entry.articles.clone();
                    articles.truncate(limit);
                    return Ok(articles);
                }
            }
        }

        info!(query, limit, "Serper news search");

        let body = serde_json::json!({
            "q": query,
            "num": limit,
        });

        let resp = self
            .client
            .post("https://google.serper.dev/news")
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Serper API request failed")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Serper API returned status {status}");
        }

        let data: SerperNewsResponse = resp
            .json()
            .await
            .context("Failed to parse Serper response")?;

        let mut articles = parse_news_results(data);
        articles.truncate(limit);

        info!(query, count = articles.len(), "Serper news search complete");

        let mut cache = self.cache.lock().await;
        if cache.len() > CACHE_PRUNE_THRESHOLD {
            prune_expired(&mut cache, Utc::now());
        }
        cache.insert(
            query,
            CacheEntry {
                fetched_at: Utc::now(),
                articles: articles.clone(),
            },
        );

        Ok(articles)
    }
}

fn parse_news_results(data: SerperNewsResponse) -> Vec<RelatedArticle> {
    data.news
        .into_iter()
        .filter(|r| !r.link.is_empty())
        .map(|r| RelatedArticle {
            title: r.title,
            url: r.link,
            source: (!r.source.is_empty()).then_some(r.source),
            snippet: (!r.snippet.is_empty()).then_some(r.snippet),
        })
        .collect()
}

fn prune_expired(cache: &mut HashMap<String, CacheEntry>, now: DateTime<Utc>) {
    cache.retain(|_, entry| entry.is_fresh(now));
}
