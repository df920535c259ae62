//! Structured JSON document view.

use super::{ExtractionReport, PageText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured view of an extraction, combining the document text with
/// metadata and summary statistics.
///
/// A failed extraction passes through unchanged: `success` stays false,
/// the error message and processing time are preserved, and no summary
/// math is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredDocument {
    /// Whether the underlying extraction (and structuring) completed
    pub success: bool,

    /// Structured content, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StructuredData>,

    /// Per-page results, in ascending page order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageText>,

    /// Number of pages processed
    pub total_pages: u32,

    /// Failure message when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Elapsed processing time at failure, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
}

impl StructuredDocument {
    /// Build a failed structured document from a failed report,
    /// preserving the error message and elapsed time unchanged.
    pub fn failure_from(report: &ExtractionReport) -> Self {
        Self::failed(
            report.error.clone().unwrap_or_default(),
            report.processing_time,
        )
    }

    /// Build a failed structured document.
    pub fn failed(error: impl Into<String>, processing_time: f64) -> Self {
        Self {
            success: false,
            data: None,
            pages: Vec::new(),
            total_pages: 0,
            error: Some(error.into()),
            processing_time: Some(processing_time),
        }
    }
}

/// Structured content block: metadata, content, and summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredData {
    /// Extraction metadata
    pub metadata: DocumentMetadata,
    /// Full text and per-page content
    pub content: DocumentContent,
    /// Summary statistics
    pub summary: DocumentSummary,
}

/// Metadata about an extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Number of pages processed
    pub total_pages: u32,

    /// Wall-clock processing time in seconds
    pub processing_time: f64,

    /// OCR language code used for recognition (e.g., "vie", "eng")
    pub language: String,

    /// Source file size in bytes
    pub file_size: u64,

    /// When the extraction ran
    pub extracted_at: DateTime<Utc>,
}

/// Document content: full text plus per-page breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Full document text with page delimiters
    pub full_text: String,

    /// Per-page results
    pub pages: Vec<PageText>,
}

/// Summary statistics over all pages.
///
/// Invariant: `total_characters` equals the sum of `char_count` over all
/// pages, and `average_chars_per_page` is that sum divided by the page
/// count. The aggregator guarantees the page count is nonzero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Total characters across all pages (trimmed text)
    pub total_characters: u64,

    /// Average characters per page
    pub average_chars_per_page: f64,
}
