//! Error types for the pdfocr library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfocr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during OCR extraction.
///
/// None of these cross the [`extract`](crate::OcrPipeline::extract) or
/// [`extract_structured`](crate::OcrPipeline::extract_structured)
/// boundary as a raw error: both convert failures into the
/// `success = false` result shape so callers always receive a
/// well-formed result object.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input file or writing scratch images.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version header is malformed.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Rendering the PDF into page images failed (corrupt, encrypted,
    /// or unreadable document). Always a whole-document failure.
    #[error("Rasterization failed: {0}")]
    Rasterization(String),

    /// Text recognition failed on a specific page.
    #[error("Recognition failed on page {page}: {reason}")]
    Recognition {
        /// Page number (1-indexed) the engine was processing.
        page: u32,
        /// Engine-reported reason.
        reason: String,
    },

    /// Recognition engine error without page context (engine binary
    /// missing, unsupported language code, malformed output).
    #[error("Recognition engine error: {0}")]
    Engine(String),

    /// A zero-page extraction was passed to the aggregator. Checked
    /// explicitly so summary statistics never divide by zero.
    #[error("Cannot summarize an extraction with zero pages")]
    EmptyDocument,

    /// Error serializing results to JSON.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a valid PDF");

        let err = Error::Recognition {
            page: 2,
            reason: "engine fault".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Recognition failed on page 2: engine fault"
        );

        let err = Error::EmptyDocument;
        assert_eq!(
            err.to_string(),
            "Cannot summarize an extraction with zero pages"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
