//! FFmpeg-based transcoder implementation.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use super::error::TranscoderError;
use super::traits::Transcoder;
use super::types::{ImageTranscodeJob, TranscodeResult};
use crate::config::TranscoderConfig;

/// FFmpeg-based transcoder implementation.
pub struct FfmpegTranscoder {
    config: TranscoderConfig,
}

impl FfmpegTranscoder {
    /// Creates a new FFmpeg transcoder with the given configuration.
    pub fn new(config: TranscoderConfig) -> Self {
        Self { config }
    }

    /// Creates a transcoder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TranscoderConfig::default())
    }

    /// Builds ffmpeg arguments for a single-frame image re-encode.
    fn build_image_args(&self, job: &ImageTranscodeJob) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(), // Overwrite output
            "-i".to_string(),
            job.input_path.to_string_lossy().to_string(),
            "-vf".to_string(),
            job.scale_filter(),
            "-frames:v".to_string(),
            "1".to_string(),
            "-c:v".to_string(),
            job.format.ffmpeg_codec().to_string(),
        ];

        args.extend(job.format.quality_args(job.quality));

        args.extend(["-loglevel".to_string(), self.config.log_level.clone()]);

        args.push(job.output_path.to_string_lossy().to_string());

        args
    }

    fn spawn_error(&self, e: std::io::Error) -> TranscoderError {
        if e.kind() == std::io::ErrorKind::NotFound {
            TranscoderError::FfmpegNotFound {
                path: self.config.ffmpeg_path.clone(),
            }
        } else {
            TranscoderError::Io(e)
        }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn transcode_image(
        &self,
        job: ImageTranscodeJob,
    ) -> Result<TranscodeResult, TranscoderError> {
        let start = Instant::now();

        if !Path::new(&job.input_path).exists() {
            return Err(TranscoderError::InputNotFound {
                path: job.input_path.clone(),
            });
        }

        let args = self.build_image_args(&job);
        debug!(ffmpeg = %self.config.ffmpeg_path.display(), ?args, "Running ffmpeg");

        let child = Command::new(&self.config.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(timeout_duration, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                // the child is killed when its handle drops
                warn!(input = %job.input_path.display(), "ffmpeg timed out");
                return Err(TranscoderError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(TranscoderError::transcode_failed(
                format!("FFmpeg exited with code: {:?}", output.status.code()),
                if stderr.trim().is_empty() {
                    None
                } else {
                    Some(stderr)
                },
            ));
        }

        // Verify output exists and get size
        let output_meta = tokio::fs::metadata(&job.output_path)
            .await
            .map_err(|_| TranscoderError::transcode_failed("Output file not created", None))?;

        let result = TranscodeResult {
            output_path: job.output_path.clone(),
            output_size_bytes: output_meta.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            output = %result.output_path.display(),
            bytes = result.output_size_bytes,
            duration_ms = result.duration_ms,
            "Image transcoded"
        );

        Ok(result)
    }

    async fn validate(&self) -> Result<(), TranscoderError> {
        let output = Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(TranscoderError::transcode_failed(
                "ffmpeg -version failed",
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use crate::transcoder::{Quality, RasterFormat};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn job(format: RasterFormat, quality: i64) -> ImageTranscodeJob {
        ImageTranscodeJob::new(
            PathBuf::from("/uploads/input.png"),
            PathBuf::from(format!("/uploads/out.{}", format.extension())),
            format,
            Quality::new(quality).unwrap(),
        )
    }

    fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    }

    #[test]
    fn test_build_image_args_jpeg() {
        let transcoder = FfmpegTranscoder::with_defaults();
        let args = transcoder.build_image_args(&job(RasterFormat::Jpeg, 100));

        assert_eq!(args[0], "-y");
        assert_eq!(value_after(&args, "-i"), Some("/uploads/input.png"));
        assert_eq!(value_after(&args, "-vf"), Some("scale=1280:-1"));
        assert_eq!(value_after(&args, "-c:v"), Some("mjpeg"));
        assert_eq!(value_after(&args, "-q:v"), Some("2"));
        assert_eq!(value_after(&args, "-frames:v"), Some("1"));
        assert_eq!(args.last().map(String::as_str), Some("/uploads/out.jpg"));
    }

    #[test]
    fn test_build_image_args_webp() {
        let transcoder = FfmpegTranscoder::with_defaults();
        let args = transcoder.build_image_args(&job(RasterFormat::Webp, 42));

        assert_eq!(value_after(&args, "-c:v"), Some("libwebp"));
        assert_eq!(value_after(&args, "-quality"), Some("42"));
        assert!(!args.contains(&"-q:v".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("/uploads/out.webp"));
    }

    #[test]
    fn test_build_image_args_uses_configured_log_level() {
        let transcoder = FfmpegTranscoder::new(TranscoderConfig {
            log_level: "warning".to_string(),
            ..Default::default()
        });
        let args = transcoder.build_image_args(&job(RasterFormat::Jpeg, 50));
        assert_eq!(value_after(&args, "-loglevel"), Some("warning"));
    }

    #[tokio::test]
    async fn test_missing_input_is_reported() {
        let transcoder = FfmpegTranscoder::with_defaults();
        let mut job = job(RasterFormat::Jpeg, 50);
        job.input_path = PathBuf::from("/definitely/not/here.png");

        let err = transcoder.transcode_image(job).await.unwrap_err();
        assert!(matches!(err, TranscoderError::InputNotFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_binary_is_reported() {
        let transcoder = FfmpegTranscoder::new(TranscoderConfig {
            ffmpeg_path: PathBuf::from("/nonexistent/ffmpeg-binary"),
            ..Default::default()
        });
        let err = transcoder.validate().await.unwrap_err();
        assert!(matches!(err, TranscoderError::FfmpegNotFound { .. }));
    }

    // The tests below run the real binary and need ffmpeg (with libwebp) on PATH.

    async fn transcode_sample(format: RasterFormat) -> (TempDir, TranscodeResult, Vec<u8>) {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in.png");
        tokio::fs::write(&input, fixtures::sample_png()).await.unwrap();
        let output = temp.path().join(format!("out.{}", format.extension()));

        let result = FfmpegTranscoder::with_defaults()
            .transcode_image(ImageTranscodeJob::new(
                input,
                output.clone(),
                format,
                Quality::new(50).unwrap(),
            ))
            .await
            .unwrap();
        let bytes = tokio::fs::read(&output).await.unwrap();
        (temp, result, bytes)
    }

    #[tokio::test]
    #[ignore = "requires ffmpeg"]
    async fn test_real_ffmpeg_jpeg() {
        let (_temp, result, bytes) = transcode_sample(RasterFormat::Jpeg).await;

        assert!(bytes.starts_with(&[0xFF, 0xD8, 0xFF]));
        assert_eq!(result.output_size_bytes, bytes.len() as u64);
        let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();
        assert_eq!((img.width(), img.height()), (1280, 720));
    }

    #[tokio::test]
    #[ignore = "requires ffmpeg"]
    async fn test_real_ffmpeg_webp() {
        let (_temp, _result, bytes) = transcode_sample(RasterFormat::Webp).await;

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
        let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::WebP).unwrap();
        assert_eq!(img.width(), 1280);
    }
}
