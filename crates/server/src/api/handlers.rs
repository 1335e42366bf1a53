use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use filecompress_core::MediaError;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// HTTP status for a failed media operation.
pub fn status_for(error: &MediaError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Plain-text error body, as returned by the attachment routes.
pub fn text_error(error: MediaError) -> Response {
    (status_for(&error), error.to_string()).into_response()
}

/// JSON `{"error": ...}` body, as returned by `/video_info`.
pub fn json_error(error: MediaError) -> Response {
    (
        status_for(&error),
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
