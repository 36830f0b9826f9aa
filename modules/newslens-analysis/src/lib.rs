pub mod bias;
pub mod sentiment;
mod tokens;
pub mod topics;

pub use bias::classify_bias;
pub use sentiment::analyze_sentiment;
pub use topics::{extract_topics, MAX_TOPICS};
