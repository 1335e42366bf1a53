//! Types for the transcoder module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Target width of every compressed image. Height follows the aspect ratio.
pub const SCALE_WIDTH: u32 = 1280;

/// Raster encodings the transcoder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RasterFormat {
    /// JPEG through ffmpeg's mjpeg encoder
    Jpeg,
    /// WebP through libwebp
    Webp,
}

impl RasterFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
        }
    }

    /// Returns the ffmpeg codec name for this format.
    pub fn ffmpeg_codec(&self) -> &'static str {
        match self {
            Self::Jpeg => "mjpeg",
            Self::Webp => "libwebp",
        }
    }

    /// Encoder arguments expressing `quality` in the codec's own scale.
    pub fn quality_args(&self, quality: Quality) -> Vec<String> {
        match self {
            Self::Jpeg => vec!["-q:v".to_string(), quality.jpeg_qscale().to_string()],
            Self::Webp => vec!["-quality".to_string(), quality.value().to_string()],
        }
    }
}

/// Compression quality in `1..=100`, higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quality(u8);

impl Quality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Returns `None` unless `value` is within `1..=100`.
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Maps quality onto mjpeg's qscale, where 2 is best and 31 is worst.
    pub fn jpeg_qscale(&self) -> u8 {
        let steps = (Self::MAX - self.0) as u32;
        (2 + (steps * 29 + 49) / 99) as u8
    }
}

/// A single image re-encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageTranscodeJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub format: RasterFormat,
    pub quality: Quality,
    /// Output width in pixels.
    pub scale_width: u32,
}

impl ImageTranscodeJob {
    /// Creates a job using the standard [`SCALE_WIDTH`].
    pub fn new(
        input_path: PathBuf,
        output_path: PathBuf,
        format: RasterFormat,
        quality: Quality,
    ) -> Self {
        Self {
            input_path,
            output_path,
            format,
            quality,
            scale_width: SCALE_WIDTH,
        }
    }

    /// The ffmpeg `-vf` value: fixed width, height derived from aspect ratio.
    pub fn scale_filter(&self) -> String {
        format!("scale={}:-1", self.scale_width)
    }
}

/// Outcome of a successful transcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscodeResult {
    pub output_path: PathBuf,
    pub output_size_bytes: u64,
    pub duration_ms: u64,
}
