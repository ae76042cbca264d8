use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    #[error("data too short: {0} bytes, the TGA header needs 18")]
    TooShort(usize),

    #[error("unsupported TGA image type {0} (only true-color 2 and RLE true-color 10)")]
    UnsupportedImageType(u8),

    #[error("unsupported TGA pixel depth {0} (only 24 and 32 bits per pixel)")]
    UnsupportedPixelDepth(u8),

    #[error("uncompressed pixel data truncated: need {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: usize, actual: usize },

    #[error("RLE packet extends past the end of the stream")]
    TruncatedRlePacket,

    #[error("RLE stream ended with {0} pixels still undecoded")]
    IncompleteRleStream(usize),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u16, height: u16 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("file not found: {}", .0.display())]
    FileNotFound(std::path::PathBuf),

    #[cfg(feature = "std")]
    #[error("file is empty: {}", .0.display())]
    EmptyFile(std::path::PathBuf),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(std::io::Error),
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
