use crate::error::TgaError;
use crate::header::TgaHeader;

/// Resource limits for decode operations.
///
/// The TGA header alone does not bound memory: an 18-byte input can declare
/// 65535x65535 pixels, a 16 GiB RGBA allocation. All fields default to
/// `None` (no limit); set `max_pixels` or `max_memory_bytes` when decoding
/// untrusted input.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum output buffer allocation in bytes (width * height * 4).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a parsed header against these limits.
    pub(crate) fn check(&self, header: &TgaHeader) -> Result<(), TgaError> {
        let width = u32::from(header.width);
        let height = u32::from(header.height);

        if let Some(max_w) = self.max_width {
            if width > max_w {
                return Err(TgaError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if height > max_h {
                return Err(TgaError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(TgaError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        if let Some(max_mem) = self.max_memory_bytes {
            let bytes = u64::from(width) * u64::from(height) * 4;
            if bytes > max_mem {
                return Err(TgaError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
