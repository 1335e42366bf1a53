use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{compress, handlers, sitemap, video};
use crate::state::AppState;

/// Routes listed in the sitemap.
pub const PAGE_ROUTES: [&str; 4] = ["/", "/compress", "/video_info", "/download_video"];

pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config().server.max_upload_bytes;

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/sitemap.xml", get(sitemap::sitemap))
        // Operations
        .route("/compress", post(compress::compress))
        .route("/video_info", post(video::video_info))
        .route("/download_video", post(video::download_video))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
