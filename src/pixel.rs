/// Source pixel layout inside a TGA stream.
///
/// True-color TGA stores pixels little-endian as blue, green, red, with an
/// optional trailing alpha byte. These are the only two depths supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TgaDepth {
    /// 24 bits per pixel: B, G, R.
    Bgr24,
    /// 32 bits per pixel: B, G, R, A.
    Bgra32,
}

impl TgaDepth {
    /// Bytes per source pixel (3 or 4).
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Bgr24 => 3,
            Self::Bgra32 => 4,
        }
    }

    /// Bits per source pixel, as stored in the header's depth field.
    pub fn bits(self) -> u8 {
        match self {
            Self::Bgr24 => 24,
            Self::Bgra32 => 32,
        }
    }

    pub(crate) fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            24 => Some(Self::Bgr24),
            32 => Some(Self::Bgra32),
            _ => None,
        }
    }
}

/// Normalize one source pixel into an RGBA quad.
///
/// Both decompression paths funnel through here, so channel order is
/// defined in exactly one place: BGR(A) in, RGBA out, alpha forced to 255
/// for 3-byte sources. `src` must be `bytes_per_pixel` long and `dst` 4.
#[inline]
pub(crate) fn write_rgba(dst: &mut [u8], src: &[u8]) {
    dst[0] = src[2];
    dst[1] = src[1];
    dst[2] = src[0];
    dst[3] = if src.len() == 4 { src[3] } else { 255 };
}
