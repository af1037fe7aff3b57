use thiserror::Error;

/// Errors produced by the sketch library.
///
/// None of these reach the user: the UI logs them and carries on as if the
/// action had succeeded.
#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Result type for sketch operations
pub type SketchResult<T> = Result<T, SketchError>;
