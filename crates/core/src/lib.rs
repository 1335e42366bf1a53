pub mod config;
pub mod extractor;
pub mod media;
pub mod pdf;
pub mod storage;
pub mod testing;
pub mod transcoder;

pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use extractor::{Extractor, ExtractorError, YtDlpExtractor};
pub use media::{
    Artifact, CompressRequest, MediaError, MediaService, OutputFormat, UploadedFile, VideoInfo,
};
pub use pdf::{ImagePdfConverter, PdfConverter, PdfError};
pub use storage::{StorageError, UploadStore};
pub use transcoder::{FfmpegTranscoder, Transcoder, TranscoderError};
