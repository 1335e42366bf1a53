use serde::{Deserialize, Serialize};

use crate::transcoder::RasterFormat;

/// Formats a client can ask `/compress` for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Jpg,
    Webp,
    Pdf,
}

/// How an [`OutputFormat`] is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    /// What the transcoder writes.
    pub raster: RasterFormat,
    /// Whether the raster is then wrapped into a PDF.
    pub to_pdf: bool,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Jpg, Self::Webp, Self::Pdf];

    /// Parses the form value; only the exact lowercase names are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Webp => "webp",
            Self::Pdf => "pdf",
        }
    }

    /// PDF shares the JPEG raster stage.
    pub fn pipeline(&self) -> Pipeline {
        match self {
            Self::Jpg => Pipeline {
                raster: RasterFormat::Jpeg,
                to_pdf: false,
            },
            Self::Webp => Pipeline {
                raster: RasterFormat::Webp,
                to_pdf: false,
            },
            Self::Pdf => Pipeline {
                raster: RasterFormat::Jpeg,
                to_pdf: true,
            },
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Pdf => "application/pdf",
        }
    }

    /// Extension of the file returned to the client.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}
