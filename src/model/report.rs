//! Whole-document extraction results.

use super::PageText;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of extracting text from a PDF document.
///
/// Exactly one of two shapes holds: a successful report has `text` and
/// `pages` populated with `error` absent, a failed report has `error`
/// set with no per-page results. The extraction contract is
/// all-or-nothing, so a failed report never carries partial pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Whether the extraction completed
    pub success: bool,

    /// Full document text with page delimiters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Per-page results, in ascending page order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageText>,

    /// Number of pages processed
    pub total_pages: u32,

    /// Wall-clock processing time in seconds
    pub processing_time: f64,

    /// Failure message when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionReport {
    /// Build a successful report. Processing time is rounded to two
    /// decimal places.
    pub fn succeeded(text: String, pages: Vec<PageText>, elapsed: Duration) -> Self {
        let total_pages = pages.len() as u32;
        Self {
            success: true,
            text: Some(text),
            pages,
            total_pages,
            processing_time: round_secs(elapsed),
            error: None,
        }
    }

    /// Build a failed report carrying the elapsed time at failure.
    pub fn failed(error: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            success: false,
            text: None,
            pages: Vec::new(),
            total_pages: 0,
            processing_time: elapsed.as_secs_f64(),
            error: Some(error.into()),
        }
    }

    /// Sum of `char_count` over all pages.
    pub fn total_characters(&self) -> u64 {
        self.pages.iter().map(|p| p.char_count as u64).sum()
    }
}

/// Round elapsed seconds to two decimal places.
fn round_secs(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}
