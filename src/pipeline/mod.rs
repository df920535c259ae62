//! Document extraction pipeline.

mod extractor;
mod options;

pub use extractor::OcrPipeline;
pub use options::{ExtractOptions, DEFAULT_DPI};
