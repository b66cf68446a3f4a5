//! Unified error types for Rambutan.
//!
//! Only conditions a caller can act on are represented here. Resource failures
//! inside a render pass (missing images, failed chart rasterisation) are turned
//! into diagnostics by the renderer and never surface as an `Error`.
use thiserror::Error;

/// Main error type for Rambutan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while writing the output stream or file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document requests CMYK colours, which RTF cannot express
    #[error("Unsupported colour mode: RTF output cannot represent CMYK colours")]
    UnsupportedColorMode,

    /// The document carries embedded files, which RTF output does not support
    #[error("Embedded files are not supported by RTF output ({0} present)")]
    EmbeddedFilesUnsupported(usize),

    /// A paragraph, cell or style refers to a style name that is not defined
    #[error("Undefined style: {0}")]
    UndefinedStyle(String),

    /// Image could not be loaded or decoded
    #[error("Image error: {0}")]
    Image(String),

    /// Chart could not be rasterised
    #[error("Chart error: {0}")]
    Chart(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

/// Result type for Rambutan operations.
pub type Result<T> = std::result::Result<T, Error>;
