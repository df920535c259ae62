//! Per-page recognition results.

use serde::{Deserialize, Serialize};

/// Recognized text for a single page.
///
/// `text` is stored trimmed; `char_count` always equals
/// `text.chars().count()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed, sequential within a run)
    pub page_number: u32,

    /// Recognized text, leading/trailing whitespace removed
    pub text: String,

    /// Character count of the trimmed text
    pub char_count: usize,
}

impl PageText {
    /// Build a page result from the raw engine output, trimming it and
    /// counting characters.
    pub fn from_raw(page_number: u32, raw: &str) -> Self {
        let text = raw.trim().to_string();
        let char_count = text.chars().count();
        Self {
            page_number,
            text,
            char_count,
        }
    }

    /// Check if the page produced no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
