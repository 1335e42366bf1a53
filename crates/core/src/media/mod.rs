//! Request orchestration for the three public operations.
//!
//! [`MediaService`] validates client input, books paths in the upload
//! directory, drives the transcoder, PDF converter and extractor, and hands
//! back either an [`Artifact`] to stream or a [`VideoInfo`] to serialize.

mod descriptor;
mod download;
mod error;
mod output;
mod service;

pub use descriptor::{sort_formats, VideoFormatDescriptor, VideoInfo};
pub use download::{content_type_for, format_selector, FALLBACK_EXTENSIONS, MERGE_OUTPUT_FORMAT};
pub use error::MediaError;
pub use output::{OutputFormat, Pipeline};
pub use service::{Artifact, CompressRequest, MediaService, UploadedFile};
