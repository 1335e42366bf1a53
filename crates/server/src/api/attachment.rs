use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;
use tracing::error;

use filecompress_core::Artifact;

/// Streams an artifact back as a download.
pub async fn send_attachment(artifact: Artifact) -> Response {
    let file = match tokio::fs::File::open(&artifact.path).await {
        Ok(file) => file,
        Err(e) => {
            error!(path = %artifact.path.display(), error = %e, "Failed to open artifact");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read output file: {}", e),
            )
                .into_response();
        }
    };
    let length = file.metadata().await.ok().map(|m| m.len());

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, artifact.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(&artifact.download_name),
        );
    if let Some(length) = length {
        response = response.header(header::CONTENT_LENGTH, length);
    }

    response
        .body(Body::from_stream(ReaderStream::new(file)))
        .unwrap_or_else(|e| {
            error!(error = %e, "Failed to build attachment response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}

fn content_disposition(filename: &str) -> String {
    let escaped: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == '"' { '\'' } else { c })
        .collect();
    format!("attachment; filename=\"{}\"", escaped)
}
