//! Extractor module for querying and downloading online videos.
//!
//! This module provides the `Extractor` trait and a yt-dlp implementation.
//! Metadata probes never fetch media bytes; downloads let yt-dlp pick and
//! merge streams and report the filename it prepared.
//!
//! # Example
//!
//! ```ignore
//! use filecompress_core::extractor::{Extractor, YtDlpExtractor};
//!
//! let extractor = YtDlpExtractor::with_defaults();
//! let info = extractor.extract_info("https://example.com/watch?v=abc").await?;
//! for format in info.formats() {
//!     println!("{:?} {:?}", format.format_id, format.height);
//! }
//! ```

mod error;
mod traits;
mod types;
mod ytdlp;

pub use error::ExtractorError;
pub use traits::Extractor;
pub use types::{DownloadOutcome, DownloadRequest, RawFormat, VideoMetadata};
pub use ytdlp::YtDlpExtractor;
