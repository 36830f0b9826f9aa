use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::tokens::tokenize;

/// Upper bound on keywords returned per text.
pub const MAX_TOPICS: usize = 8;

/// Tokens shorter than this never become keywords.
const MIN_TOKEN_LEN: usize = 4;

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "above", "after", "again", "against", "along", "also", "among",
        "because", "been", "before", "being", "below", "between", "both",
        "cannot", "could", "does", "doing", "down", "during", "each", "even",
        "every", "from", "further", "have", "having", "here", "himself", "herself",
        "into", "itself", "just", "like", "made", "many", "more", "most", "much",
        "must", "never", "only", "other", "over", "same", "several", "should",
        "since", "some", "still", "such", "said", "says", "than", "that", "their",
        "theirs", "them", "themselves", "then", "there", "these", "they", "this",
        "those", "through", "under", "until", "very", "were", "what", "when",
        "where", "which", "while", "will", "with", "within", "without", "would",
        "your", "yours",
    ]
    .into_iter()
    .collect()
});

/// Frequency-ranked topic keywords: stopword-filtered tokens of at least
/// `MIN_TOKEN_LEN` chars, ordered by count with ties broken by first
/// appearance, capped at `MAX_TOPICS`. Deterministic for a given text.
pub fn extract_topics(text: &str) -> Vec<String> {
    let tokens = tokenize(text);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for token in &tokens {
        let token = token.as_str();
        if token.len() < MIN_TOKEN_LEN || STOPWORDS.contains(token) {
            continue;
        }
        let entry = counts.entry(token).or_insert(0);
        if *entry == 0 {
            first_seen.push(token);
        }
        *entry += 1;
    }

    // first_seen is already in appearance order, so a stable sort by count
    // keeps earlier tokens ahead of later ones at equal frequency.
    let mut ranked = first_seen;
    ranked.sort_by_key(|t| std::cmp::Reverse(counts[t]));
    ranked.truncate(MAX_TOPICS);

    ranked.into_iter().map(String::from).collect()
}
