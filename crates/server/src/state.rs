use filecompress_core::{Config, MediaService};

/// Shared application state
pub struct AppState {
    config: Config,
    media: MediaService,
}

impl AppState {
    pub fn new(config: Config, media: MediaService) -> Self {
        Self { config, media }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn media(&self) -> &MediaService {
        &self.media
    }
}
