//! Mock transcoder for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::fixtures;
use crate::transcoder::{
    ImageTranscodeJob, RasterFormat, TranscodeResult, Transcoder, TranscoderError,
};

/// Mock implementation of the Transcoder trait.
///
/// Provides controllable behavior for testing:
/// - Track transcode jobs for assertions
/// - Simulate failures
/// - Control the bytes written to the output path
///
/// By default a real JPEG is written for JPEG jobs (so the PDF stage can
/// decode it) and a RIFF/WEBP stub for WebP jobs.
#[derive(Debug, Clone, Default)]
pub struct MockTranscoder {
    jobs: Arc<RwLock<Vec<ImageTranscodeJob>>>,
    next_error: Arc<RwLock<Option<TranscoderError>>>,
    output: Arc<RwLock<Option<Vec<u8>>>>,
    /// When set, report success without writing anything.
    skip_write: Arc<RwLock<bool>>,
}

impl MockTranscoder {
    /// Create a new mock transcoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded jobs.
    pub async fn recorded_jobs(&self) -> Vec<ImageTranscodeJob> {
        self.jobs.read().await.clone()
    }

    /// Configure the next transcode to fail with the given error.
    pub async fn set_next_error(&self, error: TranscoderError) {
        *self.next_error.write().await = Some(error);
    }

    /// Override the bytes written for every job.
    pub async fn set_output(&self, bytes: Vec<u8>) {
        *self.output.write().await = Some(bytes);
    }

    /// Report success without producing an output file.
    pub async fn set_skip_write(&self, skip: bool) {
        *self.skip_write.write().await = skip;
    }

    fn default_output(format: RasterFormat) -> Vec<u8> {
        match format {
            RasterFormat::Jpeg => fixtures::sample_jpeg(),
            RasterFormat::Webp => b"RIFF\x1a\x00\x00\x00WEBPVP8 mock".to_vec(),
        }
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn transcode_image(
        &self,
        job: ImageTranscodeJob,
    ) -> Result<TranscodeResult, TranscoderError> {
        self.jobs.write().await.push(job.clone());

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        let bytes = self
            .output
            .read()
            .await
            .clone()
            .unwrap_or_else(|| Self::default_output(job.format));

        if !*self.skip_write.read().await {
            tokio::fs::write(&job.output_path, &bytes).await?;
        }

        Ok(TranscodeResult {
            output_path: job.output_path,
            output_size_bytes: bytes.len() as u64,
            duration_ms: 1,
        })
    }

    async fn validate(&self) -> Result<(), TranscoderError> {
        Ok(())
    }
}
