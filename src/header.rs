use crate::error::TgaError;
use crate::pixel::TgaDepth;

/// Fixed TGA header length; pixel data always starts at this offset.
pub const HEADER_LEN: usize = 18;

/// TGA encoding scheme, from header byte 2.
///
/// Color-mapped and grayscale types (1, 3, 9, 11) are rejected up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TgaImageType {
    /// Type 2: uncompressed true-color.
    TrueColor,
    /// Type 10: run-length encoded true-color.
    TrueColorRle,
}

/// Parsed view of the fixed 18-byte TGA header.
///
/// The id-length, color-map, origin, and descriptor fields are ignored;
/// only the fields that drive decoding are retained.
#[derive(Clone, Copy, Debug)]
pub struct TgaHeader {
    pub image_type: TgaImageType,
    /// Width in pixels, little-endian u16 at offset 12.
    pub width: u16,
    /// Height in pixels, little-endian u16 at offset 14.
    pub height: u16,
    /// Source pixel layout, from the depth byte at offset 16.
    pub depth: TgaDepth,
}

impl TgaHeader {
    /// Parse and validate the header without touching pixel data.
    ///
    /// This is the cheap probe path: callers can inspect dimensions and
    /// apply their own ceilings before committing to a full decode.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        if data.len() < HEADER_LEN {
            return Err(TgaError::TooShort(data.len()));
        }

        let image_type = match data[2] {
            2 => TgaImageType::TrueColor,
            10 => TgaImageType::TrueColorRle,
            other => return Err(TgaError::UnsupportedImageType(other)),
        };

        let width = u16::from_le_bytes([data[12], data[13]]);
        let height = u16::from_le_bytes([data[14], data[15]]);

        let depth =
            TgaDepth::from_bits(data[16]).ok_or(TgaError::UnsupportedPixelDepth(data[16]))?;

        Ok(TgaHeader {
            image_type,
            width,
            height,
            depth,
        })
    }

    /// Total pixel count, or `DimensionsTooLarge` if it overflows `usize`.
    pub(crate) fn pixel_count(&self) -> Result<usize, TgaError> {
        usize::from(self.width)
            .checked_mul(usize::from(self.height))
            .ok_or(TgaError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}
