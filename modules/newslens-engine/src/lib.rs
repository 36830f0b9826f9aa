pub mod assemble;
pub mod dispatch;
pub mod normalize;
pub mod pipeline;
pub mod related;
pub mod resolver;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;

pub use pipeline::{AnalysisPipeline, SHORT_TEXT_THRESHOLD};
