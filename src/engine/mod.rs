//! External engine contracts.
//!
//! The pipeline orchestrates two collaborators it does not implement
//! itself: a rasterizer that renders PDF pages into images, and a
//! recognition engine that turns a preprocessed image into text. Both
//! are trait seams so the concrete backends stay swappable (and mockable
//! in tests).

mod pdfium;
mod tesseract;

pub use pdfium::PdfiumRasterizer;
pub use tesseract::TesseractEngine;

use crate::error::Result;
use image::{DynamicImage, GrayImage};
use std::path::Path;

/// Renders a PDF document into an ordered sequence of page images.
pub trait Rasterizer {
    /// Render every page of the PDF at `path` to a raster image at the
    /// given resolution, in page order.
    ///
    /// Fails with [`Error::Rasterization`](crate::Error::Rasterization)
    /// when the file is corrupt, encrypted, or unreadable. Rasterization
    /// failures are always whole-document failures; no partial page list
    /// is returned.
    fn render(&self, path: &Path, dpi: u32) -> Result<Vec<DynamicImage>>;
}

/// Recognizes text in a preprocessed page image.
///
/// `Send + Sync` so page recognition can run in parallel when the
/// pipeline is configured for it.
pub trait RecognitionEngine: Send + Sync {
    /// Recognize text in `image` using the given language code.
    ///
    /// Unsupported language codes are not pre-validated anywhere in the
    /// pipeline; they are forwarded here and fail with
    /// [`Error::Engine`](crate::Error::Engine).
    fn recognize(&self, image: &GrayImage, language: &str, config: &RecognitionConfig)
        -> Result<String>;
}

/// Tesseract OCR engine mode (`--oem`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// Legacy engine only
    Legacy,
    /// Neural-net LSTM engine only
    Lstm,
    /// Whatever is available
    #[default]
    Default,
}

impl EngineMode {
    /// Numeric `--oem` value.
    pub fn oem(self) -> u8 {
        match self {
            EngineMode::Legacy => 0,
            EngineMode::Lstm => 1,
            EngineMode::Default => 3,
        }
    }
}

/// Page segmentation mode (`--psm`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segmentation {
    /// Fully automatic page segmentation
    Auto,
    /// Single column of text of variable sizes
    SingleColumn,
    /// Single uniform block of text (layout-preserving, column-agnostic)
    #[default]
    SingleBlock,
    /// Single text line
    SingleLine,
}

impl Segmentation {
    /// Numeric `--psm` value.
    pub fn psm(self) -> u8 {
        match self {
            Segmentation::Auto => 3,
            Segmentation::SingleColumn => 4,
            Segmentation::SingleBlock => 6,
            Segmentation::SingleLine => 7,
        }
    }
}

/// Recognition tuning passed to the engine for every page.
///
/// The defaults treat each page as one uniform block of text while
/// preserving inter-word spacing — the configuration that works best on
/// scanned documents without multi-column layout detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    /// OCR engine mode
    pub engine_mode: EngineMode,

    /// Page segmentation mode
    pub segmentation: Segmentation,

    /// Keep the spacing between words as it appears on the page
    pub preserve_interword_spaces: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            engine_mode: EngineMode::Default,
            segmentation: Segmentation::SingleBlock,
            preserve_interword_spaces: true,
        }
    }
}

impl RecognitionConfig {
    /// Render the tesseract command-line flags for this configuration.
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = vec![
            "--oem".to_string(),
            self.engine_mode.oem().to_string(),
            "--psm".to_string(),
            self.segmentation.psm().to_string(),
        ];
        if self.preserve_interword_spaces {
            args.push("-c".to_string());
            args.push("preserve_interword_spaces=1".to_string());
        }
        args
    }
}
