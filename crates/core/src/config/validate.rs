use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0 and the upload limit is positive
/// - Tool timeouts are positive
/// - Sitemap base URL is set when the sitemap is enabled
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.server.max_upload_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "server.max_upload_bytes cannot be 0".to_string(),
        ));
    }

    if config.transcoder.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "transcoder.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.extractor.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "extractor.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.sitemap.enabled && config.sitemap.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "sitemap.base_url is required when the sitemap is enabled".to_string(),
        ));
    }

    Ok(())
}
