use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::TgaError;
use crate::header::{HEADER_LEN, TgaHeader, TgaImageType};
use crate::limits::Limits;
use crate::pixel::write_rgba;

/// Decoded image: an owned RGBA8 buffer plus dimensions.
///
/// Pixel `(x, y)` lives at byte offset `(y * width + x) * 4`, rows in
/// on-disk order. The buffer length is always exactly `width * height * 4`.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DecodeOutput {
    /// Access the RGBA pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the RGBA pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Reinterpret the pixel data as a typed [`rgb::RGBA8`] slice.
    ///
    /// Zero-copy; output is always RGBA8 so no layout check is needed.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGBA8] {
        use rgb::AsPixels as _;
        self.pixels().as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(self.as_pixels(), self.width as usize, self.height as usize)
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

/// Decode TGA data (called from the top-level entry points).
pub(crate) fn decode_tga(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, TgaError> {
    let header = TgaHeader::from_bytes(data)?;
    if let Some(limits) = limits {
        limits.check(&header)?;
    }

    let pixel_count = header.pixel_count()?;
    let out_len = pixel_count
        .checked_mul(4)
        .ok_or(TgaError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;

    stop.check()?;

    let pixel_data = &data[HEADER_LEN..];
    let bpp = header.depth.bytes_per_pixel();
    let mut out = vec![0u8; out_len];

    match header.image_type {
        TgaImageType::TrueColor => {
            decode_uncompressed(pixel_data, bpp, pixel_count, &mut out, stop)?;
        }
        TgaImageType::TrueColorRle => {
            decode_rle(pixel_data, bpp, pixel_count, &mut out, stop)?;
        }
    }

    Ok(DecodeOutput {
        pixels: out,
        width: u32::from(header.width),
        height: u32::from(header.height),
    })
}

/// Uncompressed (type 2): one source pixel per output pixel, in order.
fn decode_uncompressed(
    src: &[u8],
    bpp: usize,
    pixel_count: usize,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), TgaError> {
    // pixel_count * 4 fits in usize, so pixel_count * bpp (bpp <= 4) does too.
    let needed = pixel_count * bpp;
    if src.len() < needed {
        return Err(TgaError::TruncatedPixelData {
            needed,
            actual: src.len(),
        });
    }

    for (i, (pix, quad)) in src[..needed]
        .chunks_exact(bpp)
        .zip(out.chunks_exact_mut(4))
        .enumerate()
    {
        if i % 4096 == 0 {
            stop.check()?;
        }
        write_rgba(quad, pix);
    }

    Ok(())
}

/// RLE (type 10): packet stream of runs and literal spans.
///
/// Every source read is bounds-checked before the packet is consumed, and
/// a packet that would overrun the output is clamped to the pixels still
/// owed, so neither cursor ever leaves its buffer.
fn decode_rle(
    src: &[u8],
    bpp: usize,
    pixel_count: usize,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), TgaError> {
    let mut pos = 0usize;
    let mut written = 0usize;
    let mut packets = 0u32;

    while written < pixel_count && pos < src.len() {
        packets = packets.wrapping_add(1);
        if packets % 1024 == 0 {
            stop.check()?;
        }

        let packet = src[pos];
        pos += 1;
        let count = usize::from(packet & 0x7F) + 1;
        let take = count.min(pixel_count - written);
        let start = written * 4;

        if packet & 0x80 != 0 {
            // Run packet: one source pixel, replicated `count` times.
            let pix = src
                .get(pos..pos + bpp)
                .ok_or(TgaError::TruncatedRlePacket)?;
            pos += bpp;

            let mut quad = [0u8; 4];
            write_rgba(&mut quad, pix);
            for slot in out[start..start + take * 4].chunks_exact_mut(4) {
                slot.copy_from_slice(&quad);
            }
        } else {
            // Raw packet: `count` literal source pixels.
            let literal = src
                .get(pos..pos + count * bpp)
                .ok_or(TgaError::TruncatedRlePacket)?;
            pos += count * bpp;

            for (pix, quad) in literal
                .chunks_exact(bpp)
                .zip(out[start..].chunks_exact_mut(4))
                .take(take)
            {
                write_rgba(quad, pix);
            }
        }
        written += take;
    }

    if written < pixel_count {
        return Err(TgaError::IncompleteRleStream(pixel_count - written));
    }
    Ok(())
}
