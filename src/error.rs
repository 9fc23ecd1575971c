//! Frame rendering errors.

/// Errors that can occur while building or driving a [`FrameRenderer`].
///
/// [`FrameRenderer`]: crate::FrameRenderer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid region bounds {width}x{height}: width and height must be at least 1")]
    InvalidBounds { width: usize, height: usize },

    #[error("Failed to write frame to output: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type for frame rendering operations.
pub type Result<T> = std::result::Result<T, Error>;
