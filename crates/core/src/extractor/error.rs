//! Error types for the extractor module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to the extraction engine.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// yt-dlp binary not found.
    #[error("yt-dlp not found at path: {path}")]
    YtDlpNotFound { path: PathBuf },

    /// yt-dlp ran and reported an error; the message is its own.
    #[error("{message}")]
    ExtractionFailed { message: String },

    /// yt-dlp output could not be understood.
    #[error("Failed to parse extractor output: {reason}")]
    ParseError { reason: String },

    /// yt-dlp did not finish in time.
    #[error("Extractor timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while running yt-dlp.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractorError {
    pub fn extraction_failed(message: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            message: message.into(),
        }
    }
}
