//! Errors raised outside the tracing core: camera setup and image output.

use thiserror::Error;

/// Errors that can occur while setting up or saving a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}: both dimensions must be non-zero")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render setup and output.
pub type RenderResult<T> = Result<T, RenderError>;
