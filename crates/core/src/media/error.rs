//! Error taxonomy shared by every operation.

use thiserror::Error;

use crate::storage::StorageError;

/// Why a media request failed.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The client sent missing or malformed input.
    #[error("{0}")]
    InvalidInput(String),

    /// The requested format id is not offered for the video (any more).
    #[error(
        "Format {format_id} is not available for this video. Available formats: {}",
        .available.join(", ")
    )]
    FormatUnavailable {
        format_id: String,
        available: Vec<String>,
    },

    /// An external tool failed; `message` is the tool's own text.
    #[error("{}", describe(.context, .message))]
    ToolFailure {
        context: Option<&'static str>,
        message: String,
    },

    /// The engine reported success but no output file could be found.
    #[error("Downloaded file not found")]
    OutputNotFound,

    #[error("Failed to store upload: {0}")]
    Storage(#[from] StorageError),
}

impl MediaError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Tool failure reported as `<context>: <message>`.
    pub fn tool_failure(context: &'static str, error: impl ToString) -> Self {
        Self::ToolFailure {
            context: Some(context),
            message: error.to_string(),
        }
    }

    /// Tool failure reported with the tool's message only.
    pub fn tool_message(error: impl ToString) -> Self {
        Self::ToolFailure {
            context: None,
            message: error.to_string(),
        }
    }

    /// Whether the client is at fault (maps to HTTP 400).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::FormatUnavailable { .. })
    }
}

fn describe(context: &Option<&'static str>, message: &str) -> String {
    match context {
        Some(context) => format!("{}: {}", context, message),
        None => message.to_string(),
    }
}
