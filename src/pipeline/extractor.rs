//! Page extraction orchestration.

use crate::aggregate;
use crate::detect;
use crate::engine::{Rasterizer, RecognitionEngine};
use crate::error::{Error, Result};
use crate::model::{ExtractionReport, PageText, StructuredDocument};
use crate::pipeline::ExtractOptions;
use crate::preprocess;
use image::DynamicImage;
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// OCR extraction pipeline: rasterize, preprocess, recognize, aggregate.
///
/// A stateless service object over two injected collaborators. All state
/// is request-local; instances hold only configuration and can be shared
/// or rebuilt per call.
///
/// The failure contract is all-or-nothing at document level: any error
/// during rasterization or recognition aborts the whole extraction,
/// which is reported as a single `success = false` result with the
/// elapsed time at failure. No partial per-page results are retained.
pub struct OcrPipeline<R, E> {
    rasterizer: R,
    engine: E,
    options: ExtractOptions,
}

impl<R: Rasterizer, E: RecognitionEngine> OcrPipeline<R, E> {
    /// Create a pipeline with default options.
    pub fn new(rasterizer: R, engine: E) -> Self {
        Self::with_options(rasterizer, engine, ExtractOptions::default())
    }

    /// Create a pipeline with explicit options.
    pub fn with_options(rasterizer: R, engine: E, options: ExtractOptions) -> Self {
        Self {
            rasterizer,
            engine,
            options,
        }
    }

    /// Get the configured options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract text from the PDF at `path` using the given OCR language.
    ///
    /// Never returns a raw error: failures are captured into the report
    /// shape and callers branch on [`ExtractionReport::success`].
    pub fn extract<P: AsRef<Path>>(&self, path: P, language: &str) -> ExtractionReport {
        let path = path.as_ref();
        let started = Instant::now();

        match self.run(path, language) {
            Ok((text, pages)) => {
                log::info!(
                    "extracted {} pages from {} in {:.2}s",
                    pages.len(),
                    path.display(),
                    started.elapsed().as_secs_f64()
                );
                ExtractionReport::succeeded(text, pages, started.elapsed())
            }
            Err(e) => {
                log::warn!("extraction failed for {}: {e}", path.display());
                ExtractionReport::failed(e.to_string(), started.elapsed())
            }
        }
    }

    /// Extract text and build the structured JSON view in one call.
    ///
    /// A failed extraction passes through unchanged; summary statistics
    /// are only computed for successful reports.
    pub fn extract_structured<P: AsRef<Path>>(
        &self,
        path: P,
        language: &str,
    ) -> StructuredDocument {
        let path = path.as_ref();
        let report = self.extract(path, language);
        if !report.success {
            return StructuredDocument::failure_from(&report);
        }

        let file_size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                return StructuredDocument::failed(
                    Error::Io(e).to_string(),
                    report.processing_time,
                )
            }
        };

        aggregate::to_structured(report, language, file_size)
    }

    /// The fallible inner pipeline: validate, rasterize, recognize.
    fn run(&self, path: &Path, language: &str) -> Result<(String, Vec<PageText>)> {
        detect::require_pdf(path)?;

        let images = self.rasterizer.render(path, self.options.dpi)?;
        log::debug!("recognizing {} pages (language={language})", images.len());

        let results = if self.options.parallel {
            self.recognize_parallel(&images, language)?
        } else {
            self.recognize_sequential(&images, language)?
        };

        let mut full_text = String::new();
        let mut pages = Vec::with_capacity(results.len());
        for (raw, page) in results {
            full_text.push_str(&page_header(page.page_number));
            full_text.push_str(&raw);
            full_text.push_str("\n\n");
            pages.push(page);
        }

        Ok((full_text, pages))
    }

    /// Recognize pages one at a time, in page order.
    fn recognize_sequential(
        &self,
        images: &[DynamicImage],
        language: &str,
    ) -> Result<Vec<(String, PageText)>> {
        images
            .iter()
            .enumerate()
            .map(|(i, image)| recognize_page(&self.engine, &self.options, i, image, language))
            .collect()
    }

    /// Recognize pages in parallel. Results are buffered and collected
    /// in ascending page order; a failure on any page fails the whole
    /// batch, so the all-or-nothing contract holds.
    fn recognize_parallel(
        &self,
        images: &[DynamicImage],
        language: &str,
    ) -> Result<Vec<(String, PageText)>> {
        let engine = &self.engine;
        let options = &self.options;
        images
            .par_iter()
            .enumerate()
            .map(|(i, image)| recognize_page(engine, options, i, image, language))
            .collect()
    }
}

/// Preprocess and recognize a single page. `index` is 0-based.
fn recognize_page<E: RecognitionEngine>(
    engine: &E,
    options: &ExtractOptions,
    index: usize,
    image: &DynamicImage,
    language: &str,
) -> Result<(String, PageText)> {
    let page_number = (index + 1) as u32;
    let prepared = preprocess::binarize(image);
    let raw = engine
        .recognize(&prepared, language, &options.recognition)
        .map_err(|e| Error::Recognition {
            page: page_number,
            reason: e.to_string(),
        })?;

    let page = PageText::from_raw(page_number, &raw);
    Ok((raw, page))
}

/// Delimiter header inserted before each page in the full document text.
fn page_header(page_number: u32) -> String {
    format!("=== Page {page_number} ===\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecognitionConfig;
    use image::{GrayImage, Luma};
    use std::io::Write;

    /// Rasterizer returning a fixed set of pages. Page index is encoded
    /// in the image width so engines can tell pages apart.
    struct StaticRasterizer {
        page_count: u32,
    }

    impl Rasterizer for StaticRasterizer {
        fn render(&self, _path: &Path, _dpi: u32) -> Result<Vec<DynamicImage>> {
            Ok((0..self.page_count)
                .map(|i| {
                    DynamicImage::ImageLuma8(GrayImage::from_pixel(100 + i, 10, Luma([255u8])))
                })
                .collect())
        }
    }

    /// Rasterizer that always fails, as with a corrupt document.
    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn render(&self, _path: &Path, _dpi: u32) -> Result<Vec<DynamicImage>> {
            Err(Error::Rasterization("corrupt xref table".to_string()))
        }
    }

    /// Engine producing deterministic text keyed by the encoded page
    /// width, optionally failing on one page.
    struct EchoEngine {
        fail_on_width: Option<u32>,
    }

    impl RecognitionEngine for EchoEngine {
        fn recognize(
            &self,
            image: &GrayImage,
            language: &str,
            _config: &RecognitionConfig,
        ) -> Result<String> {
            if Some(image.width()) == self.fail_on_width {
                return Err(Error::Engine("simulated engine fault".to_string()));
            }
            Ok(format!("page-{} [{language}]\n", image.width() - 100))
        }
    }

    fn fake_pdf() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4\n%synthetic fixture\n").unwrap();
        file
    }

    fn pipeline(pages: u32, fail_on: Option<u32>) -> OcrPipeline<StaticRasterizer, EchoEngine> {
        OcrPipeline::new(
            StaticRasterizer { page_count: pages },
            EchoEngine {
                fail_on_width: fail_on.map(|i| 100 + i),
            },
        )
    }

    #[test]
    fn test_pages_are_sequential_and_ordered() {
        let file = fake_pdf();
        let report = pipeline(3, None).extract(file.path(), "eng");

        assert!(report.success);
        assert_eq!(report.total_pages, 3);
        let numbers: Vec<u32> = report.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(report.pages[1].text, "page-1 [eng]");
    }

    #[test]
    fn test_full_text_has_page_delimiters() {
        let file = fake_pdf();
        let report = pipeline(2, None).extract(file.path(), "vie");

        let text = report.text.unwrap();
        assert!(text.starts_with("=== Page 1 ===\npage-0 [vie]\n"));
        assert!(text.contains("=== Page 2 ===\npage-1 [vie]\n"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_char_count_matches_trimmed_text() {
        let file = fake_pdf();
        let report = pipeline(4, None).extract(file.path(), "eng");
        for page in &report.pages {
            assert_eq!(page.char_count, page.text.chars().count());
            assert_eq!(page.text, page.text.trim());
        }
    }

    #[test]
    fn test_rasterization_failure_is_document_failure() {
        let file = fake_pdf();
        let pipeline = OcrPipeline::new(FailingRasterizer, EchoEngine { fail_on_width: None });
        let report = pipeline.extract(file.path(), "eng");

        assert!(!report.success);
        assert!(report.pages.is_empty());
        assert!(report.error.unwrap().contains("corrupt xref table"));
        assert!(report.processing_time >= 0.0);
    }

    #[test]
    fn test_recognition_failure_aborts_whole_document() {
        let file = fake_pdf();
        // Page 2 (index 1) fails; pages 1 and 3 would have succeeded
        let report = pipeline(3, Some(1)).extract(file.path(), "eng");

        assert!(!report.success);
        assert!(report.pages.is_empty());
        let error = report.error.unwrap();
        assert!(error.contains("page 2"));
        assert!(error.contains("simulated engine fault"));
    }

    #[test]
    fn test_non_pdf_input_rejected_before_rasterization() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is definitely not a pdf file").unwrap();

        let report = pipeline(3, None).extract(file.path(), "eng");
        assert!(!report.success);
        assert!(report.error.unwrap().contains("not a valid PDF"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let file = fake_pdf();
        let sequential = pipeline(5, None).extract(file.path(), "eng");
        let parallel = OcrPipeline::with_options(
            StaticRasterizer { page_count: 5 },
            EchoEngine { fail_on_width: None },
            ExtractOptions::new().parallel(),
        )
        .extract(file.path(), "eng");

        assert_eq!(sequential.text, parallel.text);
        assert_eq!(sequential.pages, parallel.pages);
    }

    #[test]
    fn test_parallel_failure_is_still_all_or_nothing() {
        let file = fake_pdf();
        let report = OcrPipeline::with_options(
            StaticRasterizer { page_count: 4 },
            EchoEngine {
                fail_on_width: Some(102),
            },
            ExtractOptions::new().parallel(),
        )
        .extract(file.path(), "eng");

        assert!(!report.success);
        assert!(report.pages.is_empty());
    }

    #[test]
    fn test_zero_page_document_extracts_successfully() {
        let file = fake_pdf();
        let report = pipeline(0, None).extract(file.path(), "eng");
        assert!(report.success);
        assert_eq!(report.total_pages, 0);
        assert_eq!(report.text.as_deref(), Some(""));
    }
}
