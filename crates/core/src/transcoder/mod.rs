//! Transcoder module for re-encoding uploaded images.
//!
//! This module provides the `Transcoder` trait and an FFmpeg implementation
//! that downscales an image to a fixed width and re-encodes it as JPEG or
//! WebP at a caller-chosen quality.
//!
//! # Example
//!
//! ```ignore
//! use filecompress_core::transcoder::{FfmpegTranscoder, ImageTranscodeJob, Quality, RasterFormat, Transcoder};
//!
//! let transcoder = FfmpegTranscoder::with_defaults();
//! transcoder.validate().await?;
//!
//! let job = ImageTranscodeJob::new(
//!     PathBuf::from("uploads/input.png"),
//!     PathBuf::from("uploads/compressed.jpg"),
//!     RasterFormat::Jpeg,
//!     Quality::new(80).unwrap(),
//! );
//! let result = transcoder.transcode_image(job).await?;
//! println!("Wrote {} bytes in {} ms", result.output_size_bytes, result.duration_ms);
//! ```

mod error;
mod ffmpeg;
mod traits;
mod types;

pub use error::TranscoderError;
pub use ffmpeg::FfmpegTranscoder;
pub use traits::Transcoder;
pub use types::{ImageTranscodeJob, Quality, RasterFormat, TranscodeResult, SCALE_WIDTH};
