use serde::Serialize;

use crate::extractor::{RawFormat, VideoMetadata};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Codec value yt-dlp uses for an absent stream.
const NO_CODEC: &str = "none";

/// A downloadable variant of a video, as shown to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoFormatDescriptor {
    pub format_id: Option<String>,
    pub ext: Option<String>,
    /// Human readable summary, e.g. `720p - 1280x720 - 12.5MB - no audio`.
    pub format_note: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Approximate size in MB, two decimals.
    pub filesize: Option<f64>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub is_audio_only: bool,
    pub is_video_only: bool,
}

impl From<&RawFormat> for VideoFormatDescriptor {
    fn from(raw: &RawFormat) -> Self {
        let filesize = raw.size_bytes().map(|bytes| round2(bytes / BYTES_PER_MB));
        let is_audio_only = raw.vcodec.as_deref() == Some(NO_CODEC);
        let is_video_only = raw.acodec.as_deref() == Some(NO_CODEC);

        let mut note: Vec<String> = Vec::new();
        if let Some(format_note) = raw.format_note.as_deref().filter(|n| !n.is_empty()) {
            note.push(format_note.to_string());
        }
        if let (Some(w), Some(h)) = (raw.width.filter(|w| *w > 0), raw.height.filter(|h| *h > 0)) {
            note.push(format!("{}x{}", w, h));
        }
        if let Some(mb) = filesize.filter(|mb| *mb > 0.0) {
            note.push(format!("{}MB", format_mb(mb)));
        }
        if is_video_only {
            note.push("no audio".to_string());
        } else if is_audio_only {
            note.push("audio only".to_string());
        }

        Self {
            format_id: raw.format_id.clone(),
            ext: raw.ext.clone(),
            format_note: note.join(" - "),
            width: raw.width,
            height: raw.height,
            filesize,
            vcodec: raw.vcodec.clone(),
            acodec: raw.acodec.clone(),
            is_audio_only,
            is_video_only,
        }
    }
}

impl VideoFormatDescriptor {
    fn sort_key(&self) -> (u32, f64) {
        (self.height.unwrap_or(0), self.filesize.unwrap_or(0.0))
    }
}

/// Orders formats by height, then size, both descending. Equal keys keep
/// their original relative order.
pub fn sort_formats(formats: &mut [VideoFormatDescriptor]) {
    formats.sort_by(|a, b| {
        let (ah, asz) = a.sort_key();
        let (bh, bsz) = b.sort_key();
        bh.cmp(&ah).then_with(|| bsz.total_cmp(&asz))
    });
}

/// Response body of `/video_info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoInfo {
    pub title: Option<String>,
    pub duration: Option<serde_json::Number>,
    pub formats: Vec<VideoFormatDescriptor>,
}

impl From<VideoMetadata> for VideoInfo {
    fn from(info: VideoMetadata) -> Self {
        let mut formats: Vec<VideoFormatDescriptor> =
            info.formats().iter().map(VideoFormatDescriptor::from).collect();
        sort_formats(&mut formats);

        Self {
            title: info.title,
            duration: info.duration,
            formats,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `12.5` stays `12.5`, `3` becomes `3.0`.
fn format_mb(mb: f64) -> String {
    if mb.fract() == 0.0 {
        format!("{:.1}", mb)
    } else {
        format!("{}", mb)
    }
}
