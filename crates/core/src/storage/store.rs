use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use super::error::StorageError;
use super::filename::sanitize_filename;

/// A file received from a client and written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Sanitized version of the client-supplied filename.
    pub filename: String,
    /// Where the bytes were written.
    pub path: PathBuf,
}

/// Owner of the upload directory.
///
/// Created once at startup with [`UploadStore::init`] and shared by every
/// request handler.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Ensures `dir` exists and returns a store rooted at it.
    pub async fn init(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        info!(dir = %dir.display(), "Upload directory ready");
        Ok(Self { dir })
    }

    /// The directory every upload and artifact lives in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns a fresh, collision-free name stem such as
    /// `compressed_20250101120000_1a2b3c4d`.
    pub fn new_stem(&self, prefix: &str) -> String {
        let timestamp = Local::now().format("%Y%m%d%H%M%S");
        let token = Uuid::new_v4().simple().to_string();
        format!("{}_{}_{}", prefix, timestamp, &token[..8])
    }

    /// Path of an artifact named `<stem>.<ext>` inside the upload directory.
    pub fn artifact_path(&self, stem: &str, ext: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", stem, ext))
    }

    /// Writes uploaded bytes under a sanitized, collision-free name.
    pub async fn save_upload(
        &self,
        original_name: &str,
        data: &[u8],
    ) -> Result<Upload, StorageError> {
        let filename = sanitize_filename(original_name);
        let path = self
            .dir
            .join(format!("{}_{}", self.new_stem("upload"), filename));

        tokio::fs::write(&path, data)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = data.len(), "Stored upload");
        Ok(Upload { filename, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("uploads");

        let store = UploadStore::init(&dir).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[tokio::test]
    async fn test_init_accepts_existing_directory() {
        let temp = TempDir::new().unwrap();
        tokio_test::assert_ok!(UploadStore::init(temp.path()).await);
        tokio_test::assert_ok!(UploadStore::init(temp.path()).await);
    }

    #[tokio::test]
    async fn test_save_upload_sanitizes_and_writes() {
        let temp = TempDir::new().unwrap();
        let store = UploadStore::init(temp.path()).await.unwrap();

        let upload = store
            .save_upload("../holiday photo.jpg", b"jpeg-bytes")
            .await
            .unwrap();

        assert_eq!(upload.filename, "holiday_photo.jpg");
        assert_eq!(upload.path.parent().unwrap(), temp.path());
        let name = upload.path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("upload_"));
        assert!(name.ends_with("_holiday_photo.jpg"));
        assert_eq!(tokio::fs::read(&upload.path).await.unwrap(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_same_name_uploads_do_not_collide() {
        let temp = TempDir::new().unwrap();
        let store = UploadStore::init(temp.path()).await.unwrap();

        let uploads = futures::future::join_all(
            (0..16).map(|i| {
                let store = store.clone();
                async move {
                    store
                        .save_upload("same.png", format!("{}", i).as_bytes())
                        .await
                        .unwrap()
                }
            }),
        )
        .await;

        let paths: HashSet<_> = uploads.into_iter().map(|u| u.path).collect();
        assert_eq!(paths.len(), 16);
    }

    #[test]
    fn test_new_stem_shape_and_uniqueness() {
        let store = UploadStore {
            dir: PathBuf::from("uploads"),
        };
        let a = store.new_stem("compressed");
        let b = store.new_stem("compressed");

        assert_ne!(a, b);
        let parts: Vec<&str> = a.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "compressed");
        assert_eq!(parts[1].len(), 14);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn test_artifact_path() {
        let store = UploadStore {
            dir: PathBuf::from("uploads"),
        };
        assert_eq!(
            store.artifact_path("compressed_x", "webp"),
            PathBuf::from("uploads/compressed_x.webp")
        );
    }
}
