use thiserror::Error;

/// Errors that can occur while resolving a cartridge image.
///
/// Only format-level failures cross the resolution boundary; truncated
/// header fields and unknown raw codes degrade to absent values inside an
/// otherwise successful result.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No detection probe matched the image contents
    #[error("unrecognized cartridge format ({size} bytes)")]
    UnrecognizedFormat { size: u64 },

    /// The image is too small to contain any supported header
    #[error("image too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },
}
