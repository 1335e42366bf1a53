use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("cannot build PDF: {0}")]
    Build(#[from] lopdf::Error),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("conversion task failed: {0}")]
    Task(String),
}
