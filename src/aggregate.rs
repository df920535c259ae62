//! Document aggregation: structured JSON view with summary statistics.

use crate::error::{Error, Result};
use crate::model::{
    DocumentContent, DocumentMetadata, DocumentSummary, ExtractionReport, StructuredData,
    StructuredDocument,
};
use chrono::Utc;

/// Build the structured view of an extraction.
///
/// A failed report propagates unchanged (same error message, same
/// elapsed time, `success = false`) — no structuring is attempted, which
/// also keeps the zero-division guard out of the failure path.
pub fn to_structured(
    report: ExtractionReport,
    language: &str,
    file_size: u64,
) -> StructuredDocument {
    if !report.success {
        return StructuredDocument::failure_from(&report);
    }

    let summary = match summarize(&report) {
        Ok(summary) => summary,
        Err(e) => return StructuredDocument::failed(e.to_string(), report.processing_time),
    };

    let metadata = DocumentMetadata {
        total_pages: report.total_pages,
        processing_time: report.processing_time,
        language: language.to_string(),
        file_size,
        extracted_at: Utc::now(),
    };
    let content = DocumentContent {
        full_text: report.text.unwrap_or_default(),
        pages: report.pages.clone(),
    };

    StructuredDocument {
        success: true,
        data: Some(StructuredData {
            metadata,
            content,
            summary,
        }),
        pages: report.pages,
        total_pages: report.total_pages,
        error: None,
        processing_time: None,
    }
}

/// Compute summary statistics over a successful report.
///
/// Fails with [`Error::EmptyDocument`] for zero-page reports so the
/// per-page average never divides by zero.
pub fn summarize(report: &ExtractionReport) -> Result<DocumentSummary> {
    if report.total_pages == 0 {
        return Err(Error::EmptyDocument);
    }

    let total_characters = report.total_characters();
    let average_chars_per_page = total_characters as f64 / f64::from(report.total_pages);

    Ok(DocumentSummary {
        total_characters,
        average_chars_per_page,
    })
}
