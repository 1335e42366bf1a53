//! Trait definitions for the extractor module.

use async_trait::async_trait;

use super::error::ExtractorError;
use super::types::{DownloadOutcome, DownloadRequest, VideoMetadata};

/// An engine that can list and download the streams behind a video URL.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns the name of this extractor implementation.
    fn name(&self) -> &str;

    /// Fetches title, duration and available formats without downloading media.
    async fn extract_info(&self, url: &str) -> Result<VideoMetadata, ExtractorError>;

    /// Downloads the selected stream(s) into the request's output template.
    async fn download(&self, request: &DownloadRequest) -> Result<DownloadOutcome, ExtractorError>;

    /// Validates that the extractor is properly configured and ready.
    async fn validate(&self) -> Result<(), ExtractorError>;
}
