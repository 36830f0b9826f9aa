// Test mocks for the pipeline's five collaborator seams.
//
// - MockScraper (ArticleScraper) — HashMap-based URL→body, counts calls
// - MockSentiment / MockBias / MockTopics — fixed result or scripted failure
// - MockRetrieval (RelatedArticleSource) — canned article list, records the
//   limit it was asked for
//
// All count their invocations so tests can assert which seams a path
// touched and which it skipped. Unregistered input fails loudly rather
// than defaulting.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use newslens_common::{BiasLabel, RelatedArticle, SentimentLabel, SentimentResult};

use crate::traits::{
    ArticleScraper, BiasClassifier, RelatedArticleSource, SentimentAnalyzer, TopicExtractor,
};

/// Canned related articles, numbered for easy assertions.
pub fn sample_articles(count: usize) -> Vec<RelatedArticle> {
    (0..count)
        .map(|n| RelatedArticle {
            title: format!("Related article {n}"),
            url: format!("https://news.example/related/{n}"),
            source: Some("Example Wire".to_string()),
            snippet: None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// MockScraper
// ---------------------------------------------------------------------------

/// HashMap-based article scraper. Returns `Err` for unregistered URLs.
pub struct MockScraper {
    pages: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MockScraper {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn on_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleScraper for MockScraper {
    async fn extract(&self, url: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(body) => Ok(body.clone()),
            None => bail!("MockScraper: no page registered for {url}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Analyzer mocks
// ---------------------------------------------------------------------------

pub struct MockSentiment {
    result: SentimentResult,
    fail: Option<String>,
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl MockSentiment {
    pub fn neutral() -> Self {
        Self::returning(SentimentLabel::Neutral, 0.0)
    }

    pub fn returning(label: SentimentLabel, score: f64) -> Self {
        Self {
            result: SentimentResult { label, score },
            fail: None,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: SentimentResult::neutral(),
            fail: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentAnalyzer for MockSentiment {
    async fn analyze(&self, text: &str) -> Result<SentimentResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        match &self.fail {
            Some(message) => bail!("{message}"),
            None => Ok(self.result.clone()),
        }
    }
}

pub struct MockBias {
    label: BiasLabel,
    fail: Option<String>,
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl MockBias {
    pub fn center() -> Self {
        Self::returning(BiasLabel::Center)
    }

    pub fn returning(label: BiasLabel) -> Self {
        Self {
            label,
            fail: None,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            label: BiasLabel::Center,
            fail: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

#[async_trait]
impl BiasClassifier for MockBias {
    async fn classify(&self, text: &str) -> Result<BiasLabel> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        match &self.fail {
            Some(message) => bail!("{message}"),
            None => Ok(self.label),
        }
    }
}

pub struct MockTopics {
    keywords: Vec<String>,
    fail: Option<String>,
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl MockTopics {
    pub fn returning(keywords: Vec<String>) -> Self {
        Self {
            keywords,
            fail: None,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            keywords: Vec::new(),
            fail: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

#[async_trait]
impl TopicExtractor for MockTopics {
    async fn topics(&self, text: &str) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        match &self.fail {
            Some(message) => bail!("{message}"),
            None => Ok(self.keywords.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// MockRetrieval
// ---------------------------------------------------------------------------

pub struct MockRetrieval {
    articles: Vec<RelatedArticle>,
    fail: Option<String>,
    calls: AtomicUsize,
    last_limit: Mutex<Option<usize>>,
}

impl MockRetrieval {
    pub fn returning(articles: Vec<RelatedArticle>) -> Self {
        Self {
            articles,
            fail: None,
            calls: AtomicUsize::new(0),
            last_limit: Mutex::new(None),
        }
    }

    pub fn returning_n(count: usize) -> Self {
        Self::returning(sample_articles(count))
    }

    pub fn failing(message: &str) -> Self {
        Self {
            articles: Vec::new(),
            fail: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            last_limit: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_limit(&self) -> Option<usize> {
        *self.last_limit.lock().unwrap()
    }
}

#[async_trait]
impl RelatedArticleSource for MockRetrieval {
    async fn related(&self, _keywords: &[String], limit: usize) -> Result<Vec<RelatedArticle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_limit.lock().unwrap() = Some(limit);
        match &self.fail {
            Some(message) => bail!("{message}"),
            None => Ok(self.articles.clone()),
        }
    }
}
