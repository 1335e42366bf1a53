use axum::{extract::State, response::Response};
use std::sync::Arc;

use filecompress_core::CompressRequest;

use super::attachment::send_attachment;
use super::form::FormFields;
use super::handlers::text_error;
use crate::state::AppState;

/// `POST /compress`: multipart `file`, `quality`, `format`.
pub async fn compress(State(state): State<Arc<AppState>>, mut form: FormFields) -> Response {
    let request = CompressRequest {
        file: form.take_file("file"),
        quality: form.take_text("quality"),
        format: form.take_text("format"),
    };

    match state.media().compress(request).await {
        Ok(artifact) => send_attachment(artifact).await,
        Err(e) => text_error(e),
    }
}
