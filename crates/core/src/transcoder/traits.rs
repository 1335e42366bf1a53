//! Trait definitions for the transcoder module.

use async_trait::async_trait;

use super::error::TranscoderError;
use super::types::{ImageTranscodeJob, TranscodeResult};

/// A transcoder that can downscale and re-encode images.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Re-encodes the job's input into its output path.
    async fn transcode_image(
        &self,
        job: ImageTranscodeJob,
    ) -> Result<TranscodeResult, TranscoderError>;

    /// Validates that the transcoder is properly configured and ready.
    async fn validate(&self) -> Result<(), TranscoderError>;
}
