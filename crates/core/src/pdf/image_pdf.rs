use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use std::path::Path;
use tracing::{debug, info};

use super::document::{single_page_pdf, ColorSpace, PdfImage};
use super::error::PdfError;
use super::PdfConverter;

/// JPEG quality of the stream embedded in the page.
const DEFAULT_REENCODE_QUALITY: u8 = 95;

/// PDF converter backed by the `image` crate.
#[derive(Debug, Clone)]
pub struct ImagePdfConverter {
    reencode_quality: u8,
}

impl Default for ImagePdfConverter {
    fn default() -> Self {
        Self {
            reencode_quality: DEFAULT_REENCODE_QUALITY,
        }
    }
}

impl ImagePdfConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reencode_quality(mut self, quality: u8) -> Self {
        self.reencode_quality = quality.clamp(1, 100);
        self
    }

    /// Builds the PDF bytes for an encoded image.
    ///
    /// The embedded stream is always re-encoded from the decoded pixels, so
    /// its component count matches the declared colour space whatever the
    /// source was (CMYK and YCCK JPEGs decode to RGB).
    pub fn render(&self, bytes: &[u8]) -> Result<Vec<u8>, PdfError> {
        let format = image::guess_format(bytes)?;
        let img = image::load_from_memory_with_format(bytes, format)?;
        let (width, height) = (img.width(), img.height());

        let mut jpeg = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, self.reencode_quality);
        let color_space = if img.color().has_color() {
            debug!(?format, color = ?img.color(), "Re-encoding image as RGB JPEG");
            encoder.encode_image(&img.to_rgb8())?;
            ColorSpace::Rgb
        } else {
            debug!(?format, color = ?img.color(), "Re-encoding image as gray JPEG");
            encoder.encode_image(&img.to_luma8())?;
            ColorSpace::Gray
        };

        single_page_pdf(&PdfImage {
            jpeg: &jpeg,
            width,
            height,
            color_space,
        })
    }
}

#[async_trait]
impl PdfConverter for ImagePdfConverter {
    async fn convert(&self, image_path: &Path, pdf_path: &Path) -> Result<(), PdfError> {
        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(|source| PdfError::Read {
                path: image_path.to_path_buf(),
                source,
            })?;

        let converter = self.clone();
        let pdf = tokio::task::spawn_blocking(move || converter.render(&bytes))
            .await
            .map_err(|e| PdfError::Task(e.to_string()))??;

        tokio::fs::write(pdf_path, &pdf)
            .await
            .map_err(|source| PdfError::Write {
                path: pdf_path.to_path_buf(),
                source,
            })?;

        info!(pdf = %pdf_path.display(), bytes = pdf.len(), "PDF written");
        Ok(())
    }
}
