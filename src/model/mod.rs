//! Data model for extraction results.

mod page;
mod report;
mod structured;

pub use page::PageText;
pub use report::ExtractionReport;
pub use structured::{
    DocumentContent, DocumentMetadata, DocumentSummary, StructuredData, StructuredDocument,
};
