//! # zentga
//!
//! Truevision TGA (Targa) image decoder for the true-color subset:
//! uncompressed (type 2) and run-length encoded (type 10) images at 24 or
//! 32 bits per pixel. Output is always a tightly packed RGBA8 buffer in
//! on-disk row order, with alpha forced opaque for 24-bit sources.
//!
//! ## Supported Input
//!
//! - Type 2 — uncompressed true-color, 24/32 bpp
//! - Type 10 — RLE true-color, 24/32 bpp
//!
//! Trailing bytes after the pixel data (footer, extension area) are
//! ignored. The id-length, color-map, and descriptor header fields are
//! read past but never interpreted.
//!
//! ## Non-Goals
//!
//! - Color-mapped (palette) and grayscale TGA images
//! - Bit depths other than 24 and 32
//! - Footer / extension-area parsing
//! - Streaming decode (the whole stream must be in memory)
//! - Encoding
//!
//! ## Usage
//!
//! ```no_run
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe the header without decoding
//! let header = zentga::TgaHeader::from_bytes(data)?;
//! println!("{}x{} {:?}", header.width, header.height, header.image_type);
//!
//! // Full decode to RGBA8
//! let decoded = zentga::decode(data, Unstoppable)?;
//! assert_eq!(
//!     decoded.pixels().len(),
//!     decoded.width as usize * decoded.height as usize * 4
//! );
//! # Ok::<(), zentga::TgaError>(())
//! ```
//!
//! Decoding never allocates more than the header-derived output size, but
//! the header alone can demand gigabytes; pass [`Limits`] via
//! [`decode_with_limits`] when the input is untrusted.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod header;
mod limits;
mod pixel;

#[cfg(feature = "std")]
mod file;

// Re-exports
pub use decode::DecodeOutput;
pub use enough::{Stop, Unstoppable};
pub use error::TgaError;
pub use header::{HEADER_LEN, TgaHeader, TgaImageType};
pub use limits::Limits;
pub use pixel::TgaDepth;

#[cfg(feature = "std")]
pub use file::{decode_file, decode_file_with_limits};

/// Decode TGA data from memory into an RGBA8 buffer.
///
/// Pure function: no I/O, no shared state, safe to call from any number
/// of threads at once.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, TgaError> {
    decode::decode_tga(data, None, &stop)
}

/// Decode TGA data from memory, rejecting images that exceed `limits`.
///
/// Limits are checked after header validation and before the output
/// buffer is allocated.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodeOutput, TgaError> {
    decode::decode_tga(data, Some(limits), &stop)
}
