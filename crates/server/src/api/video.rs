use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::attachment::send_attachment;
use super::form::FormFields;
use super::handlers::{json_error, text_error};
use crate::state::AppState;

/// `POST /video_info`: form `url`, answers JSON.
pub async fn video_info(State(state): State<Arc<AppState>>, form: FormFields) -> Response {
    match state.media().video_info(form.text("url")).await {
        Ok(info) => Json(info).into_response(),
        Err(e) => json_error(e),
    }
}

/// `POST /download_video`: form `url` and `format_id`, answers the file.
pub async fn download_video(State(state): State<Arc<AppState>>, form: FormFields) -> Response {
    let result = state
        .media()
        .download_video(form.text("url"), form.text("format_id"))
        .await;

    match result {
        Ok(artifact) => send_attachment(artifact).await,
        Err(e) => text_error(e),
    }
}
