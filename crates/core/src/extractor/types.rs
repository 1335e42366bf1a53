//! Types for the extractor module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The part of yt-dlp's info dictionary this service reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub title: Option<String>,
    /// Seconds; yt-dlp emits integers or floats depending on the site, so
    /// the number is kept as written.
    #[serde(default)]
    pub duration: Option<serde_json::Number>,
    #[serde(default)]
    pub formats: Option<Vec<RawFormat>>,
}

impl VideoMetadata {
    pub fn formats(&self) -> &[RawFormat] {
        self.formats.as_deref().unwrap_or_default()
    }

    /// Identifiers of every listed format, in engine order.
    pub fn format_ids(&self) -> Vec<String> {
        self.formats()
            .iter()
            .filter_map(|f| f.format_id.clone())
            .collect()
    }
}

/// One entry of yt-dlp's `formats` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFormat {
    #[serde(default)]
    pub format_id: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub format_note: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub filesize: Option<f64>,
    #[serde(default)]
    pub filesize_approx: Option<f64>,
    /// Video codec, or `"none"` for audio-only streams.
    #[serde(default)]
    pub vcodec: Option<String>,
    /// Audio codec, or `"none"` for video-only streams.
    #[serde(default)]
    pub acodec: Option<String>,
}

impl RawFormat {
    /// Exact size when known, otherwise the engine's estimate.
    pub fn size_bytes(&self) -> Option<f64> {
        self.filesize
            .filter(|s| *s > 0.0)
            .or(self.filesize_approx)
            .filter(|s| *s > 0.0)
    }
}

/// What to download and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    /// yt-dlp format selection expression.
    pub format_selector: String,
    /// Output template, e.g. `uploads/download_x.%(ext)s`.
    pub output_template: PathBuf,
    /// Container used when separate streams are merged.
    pub merge_output_format: String,
}

/// What the engine reported after a download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOutcome {
    /// Filename the engine prepared from the template. Merging or remuxing
    /// can leave the real file under a different extension.
    pub prepared_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_info_dict() {
        let json = r#"{
            "id": "abc",
            "title": "A video",
            "duration": 212,
            "formats": [
                {"format_id": "140", "ext": "m4a", "acodec": "mp4a.40.2", "vcodec": "none",
                 "filesize": 3437104, "format_note": "medium"},
                {"format_id": "137", "ext": "mp4", "width": 1920, "height": 1080,
                 "acodec": "none", "vcodec": "avc1.640028", "filesize": null,
                 "filesize_approx": 80000000.5}
            ]
        }"#;

        let info: VideoMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(info.title.as_deref(), Some("A video"));
        assert_eq!(info.duration, Some(serde_json::Number::from(212)));
        assert_eq!(info.format_ids(), vec!["140", "137"]);
        assert_eq!(info.formats()[1].height, Some(1080));
        assert_eq!(info.formats()[1].size_bytes(), Some(80000000.5));
    }

    #[test]
    fn test_missing_formats_is_empty() {
        let info: VideoMetadata = serde_json::from_str(r#"{"title": "x", "formats": null}"#).unwrap();
        assert!(info.formats().is_empty());
        assert!(info.format_ids().is_empty());
    }

    #[test]
    fn test_size_bytes_prefers_exact_then_approx() {
        let exact = RawFormat {
            filesize: Some(10.0),
            filesize_approx: Some(99.0),
            ..Default::default()
        };
        assert_eq!(exact.size_bytes(), Some(10.0));

        let zero_exact = RawFormat {
            filesize: Some(0.0),
            filesize_approx: Some(99.0),
            ..Default::default()
        };
        assert_eq!(zero_exact.size_bytes(), Some(99.0));

        let unknown = RawFormat {
            filesize_approx: Some(0.0),
            ..Default::default()
        };
        assert_eq!(unknown.size_bytes(), None);
    }
}
