//! # pdfocr
//!
//! OCR text extraction from scanned PDF documents.
//!
//! This library rasterizes PDF pages, binarizes them for recognition
//! accuracy, runs per-page OCR, and aggregates the results into plain
//! text or structured JSON with summary statistics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfocr::extract_text;
//!
//! let report = extract_text("scan.pdf", "eng");
//! if report.success {
//!     println!("{}", report.text.unwrap_or_default());
//! } else {
//!     eprintln!("extraction failed: {}", report.error.unwrap_or_default());
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. **Rasterization**: pages rendered to images at 300 DPI (pdfium)
//! 2. **Preprocessing**: grayscale + Otsu binarization
//! 3. **Recognition**: per-page OCR (tesseract, `vie`/`eng`)
//! 4. **Aggregation**: concatenated text, per-page records, summary stats
//!
//! Failures anywhere abort the whole document and are reported through
//! the `success`/`error` fields of the result — callers never see a raw
//! error from [`extract_text`] or [`extract_structured`].
//!
//! Both external engines sit behind traits ([`Rasterizer`],
//! [`RecognitionEngine`]), so alternative backends can be injected via
//! [`OcrPipeline`].

pub mod aggregate;
pub mod detect;
pub mod engine;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod preprocess;
pub mod render;

// Re-export commonly used types
pub use engine::{
    EngineMode, PdfiumRasterizer, Rasterizer, RecognitionConfig, RecognitionEngine, Segmentation,
    TesseractEngine,
};
pub use error::{Error, Result};
pub use model::{
    DocumentContent, DocumentMetadata, DocumentSummary, ExtractionReport, PageText,
    StructuredData, StructuredDocument,
};
pub use pipeline::{ExtractOptions, OcrPipeline};
pub use render::JsonFormat;

use std::path::Path;

/// OCR language codes this build is configured for.
///
/// This is static configuration for callers to validate against;
/// the pipeline itself forwards any code to the recognition engine,
/// where unsupported codes fail.
pub const SUPPORTED_LANGUAGES: &[&str] = &["vie", "eng"];

/// Check whether a language code is in [`SUPPORTED_LANGUAGES`].
pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

/// Build a pipeline over the default backends: pdfium rasterization and
/// the tesseract binary.
pub fn default_pipeline() -> OcrPipeline<PdfiumRasterizer, TesseractEngine> {
    OcrPipeline::new(PdfiumRasterizer::new(), TesseractEngine::new())
}

/// Extract text from a PDF file with the default backends.
///
/// # Example
///
/// ```no_run
/// let report = pdfocr::extract_text("document.pdf", "vie");
/// println!("{} pages", report.total_pages);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P, language: &str) -> ExtractionReport {
    default_pipeline().extract(path, language)
}

/// Extract a structured JSON document view with the default backends.
///
/// # Example
///
/// ```no_run
/// use pdfocr::JsonFormat;
///
/// let doc = pdfocr::extract_structured("document.pdf", "eng");
/// let json = pdfocr::render::to_json(&doc, JsonFormat::Pretty).unwrap();
/// println!("{json}");
/// ```
pub fn extract_structured<P: AsRef<Path>>(path: P, language: &str) -> StructuredDocument {
    default_pipeline().extract_structured(path, language)
}

/// Builder for configuring an extraction over the default backends.
///
/// # Example
///
/// ```no_run
/// use pdfocr::PdfOcr;
///
/// let report = PdfOcr::new()
///     .with_dpi(200)
///     .parallel()
///     .extract("scan.pdf", "vie");
/// ```
pub struct PdfOcr {
    options: ExtractOptions,
}

impl PdfOcr {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Set the rasterization resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.options = self.options.with_dpi(dpi);
        self
    }

    /// Recognize pages in parallel.
    pub fn parallel(mut self) -> Self {
        self.options = self.options.parallel();
        self
    }

    /// Set the recognition configuration.
    pub fn with_recognition(mut self, config: RecognitionConfig) -> Self {
        self.options = self.options.with_recognition(config);
        self
    }

    /// Extract text from a PDF file.
    pub fn extract<P: AsRef<Path>>(self, path: P, language: &str) -> ExtractionReport {
        self.build().extract(path, language)
    }

    /// Extract a structured JSON document view.
    pub fn extract_structured<P: AsRef<Path>>(
        self,
        path: P,
        language: &str,
    ) -> StructuredDocument {
        self.build().extract_structured(path, language)
    }

    fn build(self) -> OcrPipeline<PdfiumRasterizer, TesseractEngine> {
        OcrPipeline::with_options(PdfiumRasterizer::new(), TesseractEngine::new(), self.options)
    }
}

impl Default for PdfOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        assert!(is_supported_language("vie"));
        assert!(is_supported_language("eng"));
        assert!(!is_supported_language("kor"));
        assert!(!is_supported_language(""));
    }

    #[test]
    fn test_builder_options() {
        let builder = PdfOcr::new().with_dpi(150).parallel();
        assert_eq!(builder.options.dpi, 150);
        assert!(builder.options.parallel);
    }

    #[test]
    fn test_builder_default_matches_options_default() {
        let builder = PdfOcr::default();
        assert_eq!(builder.options.dpi, pipeline::ExtractOptions::default().dpi);
        assert!(!builder.options.parallel);
    }
}
