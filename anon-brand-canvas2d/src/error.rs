use thiserror::Error;

pub type CanvasResult<T> = Result<T, CanvasError>;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Canvas size {width}x{height} is outside 1..={max} pixels per side")]
    InvalidSize { width: u32, height: u32, max: u32 },

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    /// Font bytes that fontdb could not turn into a single named face.
    #[error("Font data contains no usable face")]
    NoFontFace,
}
