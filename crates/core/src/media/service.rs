use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::descriptor::VideoInfo;
use super::download::{
    content_type_for, format_selector, resolve_downloaded_file, EXT_PLACEHOLDER,
    MERGE_OUTPUT_FORMAT,
};
use super::error::MediaError;
use super::output::OutputFormat;
use crate::extractor::{DownloadRequest, Extractor};
use crate::pdf::PdfConverter;
use crate::storage::UploadStore;
use crate::transcoder::{ImageTranscodeJob, Quality, Transcoder};

/// A file part received from the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedFile {
    /// Filename as sent by the client, unsanitized.
    pub filename: String,
    pub data: Vec<u8>,
}

/// Raw `/compress` form fields, validated by [`MediaService::compress`].
#[derive(Debug, Clone, Default)]
pub struct CompressRequest {
    pub file: Option<UploadedFile>,
    pub quality: Option<String>,
    pub format: Option<String>,
}

/// A finished file ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    /// Name offered to the client in `Content-Disposition`.
    pub download_name: String,
    pub content_type: &'static str,
}

impl Artifact {
    fn new(path: PathBuf, content_type: &'static str) -> Self {
        let download_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path,
            download_name,
            content_type,
        }
    }
}

/// Orchestrates compression, video probing and video downloads.
///
/// Built once at startup; all collaborators are injected so tests can swap
/// in mocks.
#[derive(Clone)]
pub struct MediaService {
    store: UploadStore,
    transcoder: Arc<dyn Transcoder>,
    pdf: Arc<dyn PdfConverter>,
    extractor: Arc<dyn Extractor>,
}

impl MediaService {
    pub fn new(
        store: UploadStore,
        transcoder: Arc<dyn Transcoder>,
        pdf: Arc<dyn PdfConverter>,
        extractor: Arc<dyn Extractor>,
    ) -> Self {
        Self {
            store,
            transcoder,
            pdf,
            extractor,
        }
    }

    pub fn store(&self) -> &UploadStore {
        &self.store
    }

    /// Checks that the external tools can be started. Failures are logged,
    /// not fatal: the affected routes will report them per request.
    pub async fn check_tools(&self) {
        match self.transcoder.validate().await {
            Ok(()) => info!(transcoder = self.transcoder.name(), "Transcoder available"),
            Err(e) => warn!(transcoder = self.transcoder.name(), error = %e, "Transcoder unavailable"),
        }
        match self.extractor.validate().await {
            Ok(()) => info!(extractor = self.extractor.name(), "Extractor available"),
            Err(e) => warn!(extractor = self.extractor.name(), error = %e, "Extractor unavailable"),
        }
    }

    /// Downscales and re-encodes an uploaded image, optionally as PDF.
    pub async fn compress(&self, request: CompressRequest) -> Result<Artifact, MediaError> {
        let file = request
            .file
            .ok_or_else(|| MediaError::invalid_input("No file part"))?;
        if file.filename.is_empty() || file.data.is_empty() {
            return Err(MediaError::invalid_input("No selected file"));
        }

        let quality = request
            .quality
            .as_deref()
            .and_then(|q| q.trim().parse::<i64>().ok())
            .and_then(Quality::new)
            .ok_or_else(|| MediaError::invalid_input("Quality must be between 1 and 100"))?;

        let format = request
            .format
            .as_deref()
            .and_then(OutputFormat::parse)
            .ok_or_else(|| MediaError::invalid_input("Invalid format selected"))?;

        let upload = self.store.save_upload(&file.filename, &file.data).await?;

        let pipeline = format.pipeline();
        let stem = self.store.new_stem("compressed");
        let raster_path = self.store.artifact_path(&stem, pipeline.raster.extension());

        let job = ImageTranscodeJob::new(
            upload.path.clone(),
            raster_path.clone(),
            pipeline.raster,
            quality,
        );
        self.transcoder.transcode_image(job).await.map_err(|e| {
            warn!(input = %upload.path.display(), error = %e, "Image compression failed");
            MediaError::tool_failure("Failed to compress image", e)
        })?;

        if !pipeline.to_pdf {
            return Ok(Artifact::new(raster_path, format.content_type()));
        }

        let pdf_path = self.store.artifact_path(&stem, format.extension());
        self.pdf.convert(&raster_path, &pdf_path).await.map_err(|e| {
            warn!(input = %raster_path.display(), error = %e, "PDF conversion failed");
            MediaError::tool_failure("Failed to convert image to PDF", e)
        })?;

        Ok(Artifact::new(pdf_path, format.content_type()))
    }

    /// Lists the formats available for a video URL, best first.
    pub async fn video_info(&self, url: Option<&str>) -> Result<VideoInfo, MediaError> {
        let url = non_blank(url).ok_or_else(|| MediaError::invalid_input("No URL provided"))?;

        let info = self.extractor.extract_info(url).await.map_err(|e| {
            warn!(url, error = %e, "Video info extraction failed");
            MediaError::tool_message(e)
        })?;

        Ok(VideoInfo::from(info))
    }

    /// Downloads one format of a video and locates the written file.
    pub async fn download_video(
        &self,
        url: Option<&str>,
        format_id: Option<&str>,
    ) -> Result<Artifact, MediaError> {
        let url = non_blank(url).ok_or_else(|| MediaError::invalid_input("No URL provided"))?;
        // blank is rejected, but the id itself must match exactly
        let format_id = format_id
            .filter(|id| non_blank(Some(id)).is_some())
            .ok_or_else(|| MediaError::invalid_input("No format selected"))?;

        // formats can change between the info and download calls
        let info = self
            .extractor
            .extract_info(url)
            .await
            .map_err(|e| MediaError::tool_failure("Failed to verify format availability", e))?;

        let available = info.format_ids();
        if !available.iter().any(|id| id == format_id) {
            return Err(MediaError::FormatUnavailable {
                format_id: format_id.to_string(),
                available,
            });
        }

        let stem = self.store.new_stem("download");
        let output_template = self.store.dir().join(format!("{}{}", stem, EXT_PLACEHOLDER));
        let request = DownloadRequest {
            url: url.to_string(),
            format_selector: format_selector(format_id),
            output_template: output_template.clone(),
            merge_output_format: MERGE_OUTPUT_FORMAT.to_string(),
        };

        let outcome = self.extractor.download(&request).await.map_err(|e| {
            error!(url, format_id, error = %e, "Download error");
            MediaError::tool_failure("Failed to download video", e)
        })?;

        let path = resolve_downloaded_file(outcome.prepared_path.as_deref(), &output_template)
            .await
            .ok_or_else(|| {
                error!(url, template = %output_template.display(), "Downloaded file not found");
                MediaError::OutputNotFound
            })?;

        info!(url, format_id, file = %path.display(), "Video downloaded");
        let content_type = content_type_for(&path);
        Ok(Artifact::new(path, content_type))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl std::fmt::Debug for MediaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaService")
            .field("upload_dir", &self.store.dir())
            .field("transcoder", &self.transcoder.name())
            .field("extractor", &self.extractor.name())
            .finish()
    }
}
