//! Extraction options and configuration.

use crate::engine::RecognitionConfig;

/// Default rasterization resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 300;

/// Options for extracting text from a PDF document.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Rasterization resolution in dots per inch
    pub dpi: u32,

    /// Whether to recognize pages in parallel. Output ordering and the
    /// all-or-nothing failure contract are preserved either way.
    pub parallel: bool,

    /// Recognition engine tuning
    pub recognition: RecognitionConfig,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rasterization resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Enable parallel page recognition.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Disable parallel page recognition.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the recognition configuration.
    pub fn with_recognition(mut self, config: RecognitionConfig) -> Self {
        self.recognition = config;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            parallel: false,
            recognition: RecognitionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Segmentation;

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.dpi, 300);
        assert!(!options.parallel);
        assert_eq!(options.recognition.segmentation, Segmentation::SingleBlock);
        assert!(options.recognition.preserve_interword_spaces);
    }

    #[test]
    fn test_options_builder() {
        let options = ExtractOptions::new().with_dpi(150).parallel();
        assert_eq!(options.dpi, 150);
        assert!(options.parallel);

        let options = options.sequential();
        assert!(!options.parallel);
    }
}
