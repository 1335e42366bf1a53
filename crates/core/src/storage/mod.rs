//! Upload and artifact storage.
//!
//! A single directory holds every uploaded file and every generated artifact.
//! Files are named `<prefix>_<timestamp>_<token>` so concurrent requests never
//! write to the same path. Nothing here deletes files.

mod error;
mod filename;
mod store;

pub use error::StorageError;
pub use filename::sanitize_filename;
pub use store::{Upload, UploadStore};
