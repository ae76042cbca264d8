//! File decoding (`std` only): read the whole file, then decode from memory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use enough::Stop;

use crate::decode::{DecodeOutput, decode_tga};
use crate::error::TgaError;
use crate::limits::Limits;

/// Decode a TGA file.
///
/// Reads the entire file into a transient buffer, decodes it, and drops
/// the buffer before returning; only the RGBA output survives. A missing
/// path maps to [`TgaError::FileNotFound`], a zero-length file to
/// [`TgaError::EmptyFile`], any other open/read failure to
/// [`TgaError::Io`]. The decoder's own result passes through unchanged.
pub fn decode_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<DecodeOutput, TgaError> {
    read_and_decode(path.as_ref(), None, &stop)
}

/// Decode a TGA file, rejecting images that exceed `limits`.
pub fn decode_file_with_limits(
    path: impl AsRef<Path>,
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodeOutput, TgaError> {
    read_and_decode(path.as_ref(), Some(limits), &stop)
}

fn read_and_decode(
    path: &Path,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, TgaError> {
    let data = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TgaError::FileNotFound(path.to_path_buf()),
        _ => TgaError::Io(e),
    })?;

    if data.is_empty() {
        return Err(TgaError::EmptyFile(path.to_path_buf()));
    }

    decode_tga(&data, limits, stop)
}
