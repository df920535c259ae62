//! PDF rasterization backed by pdfium.

use crate::error::{Error, Result};
use crate::Rasterizer;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

/// PDF points per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// [`Rasterizer`] backed by the pdfium library (dynamically linked).
///
/// The library is bound per render call: pdfium handles are not thread
/// safe, so the rasterizer itself stays a plain configuration struct.
#[derive(Debug, Clone, Default)]
pub struct PdfiumRasterizer {
    /// Optional directory to search for libpdfium before falling back to
    /// the system library paths.
    library_path: Option<PathBuf>,
}

impl PdfiumRasterizer {
    /// Create a rasterizer that binds the system pdfium library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rasterizer that looks for libpdfium in `dir` first.
    pub fn with_library_path(dir: impl Into<PathBuf>) -> Self {
        Self {
            library_path: Some(dir.into()),
        }
    }

    /// Bind the pdfium library.
    fn bind(&self) -> Result<Pdfium> {
        let bindings = match &self.library_path {
            Some(dir) => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
                .or_else(|_| Pdfium::bind_to_system_library()),
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| {
            Error::Rasterization(format!("failed to load pdfium library: {e:?}"))
        })?;

        Ok(Pdfium::new(bindings))
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn render(&self, path: &Path, dpi: u32) -> Result<Vec<DynamicImage>> {
        let pdfium = self.bind()?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::Rasterization(format!("{e:?}")))?;

        let scale = dpi as f32 / POINTS_PER_INCH;
        let mut images = Vec::with_capacity(document.pages().len() as usize);

        for page in document.pages().iter() {
            let width = (page.width().value * scale).round() as i32;
            let height = (page.height().value * scale).round() as i32;
            let config = PdfRenderConfig::new()
                .set_target_width(width)
                .set_maximum_height(height);

            let bitmap = page
                .render_with_config(&config)
                .map_err(|e| Error::Rasterization(format!("{e:?}")))?;
            images.push(bitmap.as_image());
        }

        log::debug!(
            "rasterized {} pages from {} at {dpi} dpi",
            images.len(),
            path.display()
        );
        Ok(images)
    }
}
