//! Text recognition backed by the tesseract binary.

use crate::error::{Error, Result};
use crate::{RecognitionConfig, RecognitionEngine};
use image::GrayImage;
use std::path::PathBuf;
use std::process::Command;

/// [`RecognitionEngine`] that shells out to the `tesseract` binary.
///
/// Each call writes the page image to a scratch PNG, runs tesseract with
/// the configured flags, and captures stdout. Bad language codes surface
/// here as engine errors: tesseract exits non-zero when the requested
/// traineddata is not installed.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
}

impl TesseractEngine {
    /// Create an engine using `tesseract` from `PATH`.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
        }
    }

    /// Create an engine with an explicit binary path.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Check whether the tesseract binary can be executed.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .is_ok()
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine for TesseractEngine {
    fn recognize(
        &self,
        image: &GrayImage,
        language: &str,
        config: &RecognitionConfig,
    ) -> Result<String> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("page.png");
        image
            .save(&input)
            .map_err(|e| Error::Engine(format!("failed to write page image: {e}")))?;

        let output = Command::new(&self.binary)
            .arg(&input)
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .args(config.cli_args())
            .output()
            .map_err(|e| Error::Engine(format!("failed to run tesseract: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Engine(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
