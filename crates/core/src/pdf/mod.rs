//! Single-page PDF output for raster images.
//!
//! The image is decoded with the `image` crate, re-encoded as an RGB or gray
//! JPEG and embedded (DCTDecode) in a document written with `lopdf`. The page
//! is the image's pixel size at 72 dpi.

mod document;
mod error;
mod image_pdf;

pub use document::{single_page_pdf, ColorSpace, PdfImage};
pub use error::PdfError;
pub use image_pdf::ImagePdfConverter;

use async_trait::async_trait;
use std::path::Path;

/// Converts a raster image file into a PDF file.
#[async_trait]
pub trait PdfConverter: Send + Sync {
    /// Writes a single-page PDF of `image_path` to `pdf_path`.
    async fn convert(&self, image_path: &Path, pdf_path: &Path) -> Result<(), PdfError>;
}
