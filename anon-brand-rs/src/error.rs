//! Error types for anon-brand-rs.

use anon_brand_canvas2d::CanvasError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using BrandError.
pub type BrandResult<T> = Result<T, BrandError>;

#[derive(Debug, Error)]
pub enum BrandError {
    /// A color string that is not six hex digits with an optional `#`.
    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),

    #[error("Unknown palette color name: {0:?}")]
    UnknownPaletteName(String),

    /// The configured font file could not be used and the fallback strategy forbids substitution.
    #[error("Font file {} is unavailable: {reason}", file.display())]
    FontUnavailable { file: PathBuf, reason: String },

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error("PDF error: {0}")]
    Pdf(#[from] anyhow::Error),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
