use std::path::{Path, PathBuf};

/// Container yt-dlp merges separate audio/video streams into.
pub const MERGE_OUTPUT_FORMAT: &str = "mp4";

/// Extensions probed, in order, when the prepared filename does not exist.
pub const FALLBACK_EXTENSIONS: [&str; 5] = ["mp4", "webm", "mkv", "m4a", "mp3"];

/// Template placeholder yt-dlp replaces with the real extension.
pub(crate) const EXT_PLACEHOLDER: &str = ".%(ext)s";

/// Exact id first, then the id paired with the best audio, then anything.
pub fn format_selector(format_id: &str) -> String {
    format!("[format_id={id}]/{id}+bestaudio/best", id = format_id)
}

/// MIME type for a downloaded file, by extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("mp4") => "video/mp4",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        _ => "application/octet-stream",
    }
}

/// Paths to check for the downloaded file, most likely first.
pub(crate) fn candidate_paths(prepared: Option<&Path>, template: &Path) -> Vec<PathBuf> {
    let base = match prepared {
        Some(prepared) => prepared.with_extension(""),
        None => {
            let template = template.to_string_lossy();
            PathBuf::from(template.trim_end_matches(EXT_PLACEHOLDER))
        }
    };

    let mut candidates: Vec<PathBuf> = prepared.map(Path::to_path_buf).into_iter().collect();
    for ext in FALLBACK_EXTENSIONS {
        let candidate = base.with_extension(ext);
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

/// First candidate that exists as a regular file.
pub(crate) async fn resolve_downloaded_file(
    prepared: Option<&Path>,
    template: &Path,
) -> Option<PathBuf> {
    for candidate in candidate_paths(prepared, template) {
        if let Ok(meta) = tokio::fs::metadata(&candidate).await {
            if meta.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
