//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the external tool traits,
//! allowing the full request flow to be exercised without ffmpeg or yt-dlp.
//!
//! # Example
//!
//! ```rust,ignore
//! use filecompress_core::testing::{fixtures, MockExtractor, MockTranscoder};
//!
//! let transcoder = MockTranscoder::new();
//! let extractor = MockExtractor::new();
//!
//! extractor.set_info(fixtures::video_metadata()).await;
//! extractor.set_download_behavior(DownloadBehavior::remuxed("mp4", "mkv")).await;
//!
//! // Use in MediaService...
//! ```

mod mock_extractor;
mod mock_transcoder;

pub use mock_extractor::{DownloadBehavior, MockExtractor};
pub use mock_transcoder::MockTranscoder;

/// Test fixtures and helper functions.
pub mod fixtures {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    use crate::extractor::{RawFormat, VideoMetadata};

    /// Encodes a solid-colour RGB image.
    pub fn sample_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([180, 40, 90])));
        let mut cursor = Cursor::new(Vec::new());
        img.write_to(&mut cursor, format)
            .expect("in-memory encode cannot fail");
        cursor.into_inner()
    }

    /// A small baseline JPEG.
    pub fn sample_jpeg() -> Vec<u8> {
        sample_image(16, 9, ImageFormat::Jpeg)
    }

    /// A small PNG, the kind of file clients usually upload.
    pub fn sample_png() -> Vec<u8> {
        sample_image(32, 18, ImageFormat::Png)
    }

    /// A format entry with the fields the service reads.
    pub fn raw_format(
        format_id: &str,
        ext: &str,
        height: Option<u32>,
        filesize: Option<f64>,
        vcodec: &str,
        acodec: &str,
    ) -> RawFormat {
        RawFormat {
            format_id: Some(format_id.to_string()),
            ext: Some(ext.to_string()),
            format_note: height.map(|h| format!("{}p", h)),
            width: height.map(|h| h * 16 / 9),
            height,
            filesize,
            filesize_approx: None,
            vcodec: Some(vcodec.to_string()),
            acodec: Some(acodec.to_string()),
        }
    }

    /// Metadata resembling a typical video page, formats in engine order
    /// (worst first).
    pub fn video_metadata() -> VideoMetadata {
        const MB: f64 = 1024.0 * 1024.0;
        VideoMetadata {
            title: Some("Sample video".to_string()),
            duration: Some(serde_json::Number::from(213)),
            formats: Some(vec![
                raw_format("139", "m4a", None, Some(1.2 * MB), "none", "mp4a.40.5"),
                raw_format("140", "m4a", None, Some(3.4 * MB), "none", "mp4a.40.2"),
                raw_format("18", "mp4", Some(360), Some(8.1 * MB), "avc1.42001E", "mp4a.40.2"),
                raw_format("135", "mp4", Some(480), Some(10.0 * MB), "avc1.4d401e", "none"),
                raw_format("244", "webm", Some(480), Some(12.5 * MB), "vp9", "none"),
                raw_format("22", "mp4", Some(720), None, "avc1.64001F", "mp4a.40.2"),
                raw_format("137", "mp4", Some(1080), Some(60.0 * MB), "avc1.640028", "none"),
            ]),
        }
    }
}
