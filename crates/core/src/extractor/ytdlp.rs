//! yt-dlp based extractor implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use super::error::ExtractorError;
use super::traits::Extractor;
use super::types::{DownloadOutcome, DownloadRequest, VideoMetadata};
use crate::config::ExtractorConfig;

/// Extractor that shells out to the `yt-dlp` command line tool.
pub struct YtDlpExtractor {
    config: ExtractorConfig,
}

impl YtDlpExtractor {
    /// Creates a new extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Creates an extractor with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ExtractorConfig::default())
    }

    /// Arguments for a flat, quiet metadata dump.
    fn build_info_args(url: &str) -> Vec<String> {
        vec![
            "--dump-single-json".to_string(),
            "--flat-playlist".to_string(),
            "--no-warnings".to_string(),
            "--quiet".to_string(),
            "--".to_string(),
            url.to_string(),
        ]
    }

    /// Arguments for a download that prints the prepared filename.
    fn build_download_args(request: &DownloadRequest) -> Vec<String> {
        vec![
            "--format".to_string(),
            request.format_selector.clone(),
            "--merge-output-format".to_string(),
            request.merge_output_format.clone(),
            "--output".to_string(),
            request.output_template.to_string_lossy().to_string(),
            "--no-playlist".to_string(),
            "--no-simulate".to_string(),
            "--print".to_string(),
            "filename".to_string(),
            "--no-warnings".to_string(),
            "--quiet".to_string(),
            "--".to_string(),
            request.url.clone(),
        ]
    }

    /// Last non-empty stdout line, which is what `--print filename` emits.
    fn parse_prepared_filename(stdout: &str) -> Option<PathBuf> {
        stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .last()
            .map(PathBuf::from)
    }

    fn parse_info(stdout: &[u8]) -> Result<VideoMetadata, ExtractorError> {
        serde_json::from_slice(stdout).map_err(|e| ExtractorError::ParseError {
            reason: format!("Failed to parse yt-dlp JSON: {}", e),
        })
    }

    /// Runs yt-dlp and returns its output if it exited successfully.
    async fn run(&self, args: &[String]) -> Result<Output, ExtractorError> {
        debug!(ytdlp = %self.config.ytdlp_path.display(), ?args, "Running yt-dlp");

        let child = Command::new(&self.config.ytdlp_path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractorError::YtDlpNotFound {
                        path: self.config.ytdlp_path.clone(),
                    }
                } else {
                    ExtractorError::Io(e)
                }
            })?;

        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(timeout_duration, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("yt-dlp timed out");
                return Err(ExtractorError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("yt-dlp exited with code: {:?}", output.status.code())
            } else {
                stderr
            };
            return Err(ExtractorError::extraction_failed(message));
        }

        Ok(output)
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn extract_info(&self, url: &str) -> Result<VideoMetadata, ExtractorError> {
        let output = self.run(&Self::build_info_args(url)).await?;
        let info = Self::parse_info(&output.stdout)?;
        debug!(url, formats = info.formats().len(), "Extracted video info");
        Ok(info)
    }

    async fn download(&self, request: &DownloadRequest) -> Result<DownloadOutcome, ExtractorError> {
        let output = self.run(&Self::build_download_args(request)).await?;
        let prepared_path = Self::parse_prepared_filename(&String::from_utf8_lossy(&output.stdout));

        info!(
            url = %request.url,
            selector = %request.format_selector,
            prepared = ?prepared_path,
            "yt-dlp download finished"
        );

        Ok(DownloadOutcome { prepared_path })
    }

    async fn validate(&self) -> Result<(), ExtractorError> {
        self.run(&["--version".to_string()]).await.map(|_| ())
    }
}
