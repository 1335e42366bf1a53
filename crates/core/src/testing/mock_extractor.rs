//! Mock extractor for testing.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::extractor::{
    DownloadOutcome, DownloadRequest, Extractor, ExtractorError, VideoMetadata,
};

/// How the mock reacts to a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadBehavior {
    /// Extension of the filename reported back, `None` to report nothing.
    pub reported_ext: Option<String>,
    /// Extension of the file actually written, `None` to write nothing.
    pub written_ext: Option<String>,
}

impl Default for DownloadBehavior {
    fn default() -> Self {
        Self::exact("mp4")
    }
}

impl DownloadBehavior {
    /// The file lands exactly where the engine says.
    pub fn exact(ext: &str) -> Self {
        Self {
            reported_ext: Some(ext.to_string()),
            written_ext: Some(ext.to_string()),
        }
    }

    /// The engine reports one container but writes another.
    pub fn remuxed(reported: &str, written: &str) -> Self {
        Self {
            reported_ext: Some(reported.to_string()),
            written_ext: Some(written.to_string()),
        }
    }

    /// The engine claims success but nothing is on disk.
    pub fn missing() -> Self {
        Self {
            reported_ext: Some("mp4".to_string()),
            written_ext: None,
        }
    }
}

/// Mock implementation of the Extractor trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable metadata
/// - Track probed URLs and download requests
/// - Simulate failures and remuxed/missing downloads
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    info: Arc<RwLock<VideoMetadata>>,
    probes: Arc<RwLock<Vec<String>>>,
    downloads: Arc<RwLock<Vec<DownloadRequest>>>,
    next_info_error: Arc<RwLock<Option<ExtractorError>>>,
    next_download_error: Arc<RwLock<Option<ExtractorError>>>,
    behavior: Arc<RwLock<DownloadBehavior>>,
}

impl MockExtractor {
    /// Create a new mock extractor with empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metadata returned by subsequent probes.
    pub async fn set_info(&self, info: VideoMetadata) {
        *self.info.write().await = info;
    }

    /// Set how subsequent downloads behave.
    pub async fn set_download_behavior(&self, behavior: DownloadBehavior) {
        *self.behavior.write().await = behavior;
    }

    /// Configure the next probe to fail.
    pub async fn set_next_info_error(&self, error: ExtractorError) {
        *self.next_info_error.write().await = Some(error);
    }

    /// Configure the next download to fail.
    pub async fn set_next_download_error(&self, error: ExtractorError) {
        *self.next_download_error.write().await = Some(error);
    }

    /// URLs probed so far.
    pub async fn recorded_probes(&self) -> Vec<String> {
        self.probes.read().await.clone()
    }

    /// Download requests received so far.
    pub async fn recorded_downloads(&self) -> Vec<DownloadRequest> {
        self.downloads.read().await.clone()
    }

    fn with_ext(template: &std::path::Path, ext: &str) -> PathBuf {
        let template = template.to_string_lossy();
        PathBuf::from(template.replace("%(ext)s", ext))
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn extract_info(&self, url: &str) -> Result<VideoMetadata, ExtractorError> {
        self.probes.write().await.push(url.to_string());

        if let Some(err) = self.next_info_error.write().await.take() {
            return Err(err);
        }

        Ok(self.info.read().await.clone())
    }

    async fn download(&self, request: &DownloadRequest) -> Result<DownloadOutcome, ExtractorError> {
        self.downloads.write().await.push(request.clone());

        if let Some(err) = self.next_download_error.write().await.take() {
            return Err(err);
        }

        let behavior = self.behavior.read().await.clone();

        if let Some(ext) = &behavior.written_ext {
            let path = Self::with_ext(&request.output_template, ext);
            tokio::fs::write(&path, format!("mock media for {}", request.url)).await?;
        }

        Ok(DownloadOutcome {
            prepared_path: behavior
                .reported_ext
                .as_deref()
                .map(|ext| Self::with_ext(&request.output_template, ext)),
        })
    }

    async fn validate(&self) -> Result<(), ExtractorError> {
        Ok(())
    }
}
