use thiserror::Error;

/// Failure to turn encoded bytes into an image source.
///
/// No partial frame store is ever produced alongside this error; the host
/// decides on a fallback (static placeholder, retry, ...).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied.
    #[error("image data is empty")]
    Empty,
    /// The container parsed but produced no frames.
    #[error("image contains no frames")]
    NoFrames,
    /// Unrecognized format or malformed data, as reported by the codec.
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}
