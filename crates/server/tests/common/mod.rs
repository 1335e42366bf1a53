//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock tools injected, enabling full request testing without ffmpeg
//! or yt-dlp installed.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use filecompress_core::{
    config::{Config, SitemapConfig, StorageConfig},
    pdf::ImagePdfConverter,
    storage::UploadStore,
    testing::{MockExtractor, MockTranscoder},
    MediaService,
};
use filecompress_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use filecompress_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// Provides an in-process server with fully controllable mocks for:
/// - Image transcoding (MockTranscoder)
/// - Video probing and downloading (MockExtractor)
///
/// PDF conversion is real, it only needs the `image` crate.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_compress() {
///     let fixture = TestFixture::new().await;
///
///     let form = MultipartForm::new()
///         .file("file", "a.png", fixtures::sample_png())
///         .text("quality", "50")
///         .text("format", "jpg");
///     let response = fixture.post_multipart("/compress", form).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock transcoder - inspect jobs, inject failures
    pub transcoder: MockTranscoder,
    /// Mock extractor - configure metadata and download behavior
    pub extractor: MockExtractor,
    /// Temporary directory holding the upload directory
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// Body parsed as JSON, `Null` when it is not JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).to_string()
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub sitemap_enabled: bool,
    pub max_upload_bytes: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            sitemap_enabled: true,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let upload_dir = temp_dir.path().join("uploads");

        let mut config = Config {
            storage: StorageConfig {
                upload_dir: upload_dir.clone(),
            },
            sitemap: SitemapConfig {
                enabled: test_config.sitemap_enabled,
                base_url: "https://files.example.com".to_string(),
            },
            ..Default::default()
        };
        config.server.max_upload_bytes = test_config.max_upload_bytes;

        let transcoder = MockTranscoder::new();
        let extractor = MockExtractor::new();
        extractor.set_info(fixtures::video_metadata()).await;

        let store = UploadStore::init(upload_dir)
            .await
            .expect("Failed to create upload dir");
        let media = MediaService::new(
            store,
            Arc::new(transcoder.clone()),
            Arc::new(ImagePdfConverter::new()),
            Arc::new(extractor.clone()),
        );

        let router = create_router(Arc::new(AppState::new(config, media)));

        Self {
            router,
            transcoder,
            extractor,
            temp_dir,
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.temp_dir.path().join("uploads")
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None, Body::empty()).await
    }

    /// Send a POST request with a urlencoded form body.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        self.request(
            "POST",
            path,
            Some("application/x-www-form-urlencoded"),
            Body::from(body),
        )
        .await
    }

    /// Send a POST request with a multipart form body.
    pub async fn post_multipart(&self, path: &str, form: MultipartForm) -> TestResponse {
        let content_type = form.content_type();
        self.request("POST", path, Some(&content_type), Body::from(form.into_bytes()))
            .await
    }

    /// Send a POST request with raw body and custom content type.
    pub async fn post_raw(&self, path: &str, body: &str, content_type: &str) -> TestResponse {
        self.request("POST", path, Some(content_type), Body::from(body.to_string()))
            .await
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            bytes,
        }
    }
}

/// Builder for `multipart/form-data` bodies.
#[derive(Debug, Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

const BOUNDARY: &str = "----filecompress-test-boundary";

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, data: Vec<u8>) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, name, filename
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(&data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        self.body
    }
}

/// Multipart request for `/compress`.
pub fn compress_form(quality: &str, format: &str) -> MultipartForm {
    MultipartForm::new()
        .file("file", "photo.png", fixtures::sample_png())
        .text("quality", quality)
        .text("format", format)
}
