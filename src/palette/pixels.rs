//! Decoded RGB pixel buffers.

use std::io::Read;

use crate::color::RgbColor;

/// Errors that can occur while building a pixel buffer.
#[derive(Debug, thiserror::Error)]
pub enum PixelError {
    #[error("Image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("Image dimensions {width}x{height} are too large")]
    TooLarge { width: u32, height: u32 },

    #[error("Pixel data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Failed to read pixel data: {0}")]
    Io(#[from] std::io::Error),
}

/// Row-major RGB pixels of a decoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<RgbColor>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<RgbColor>) -> Result<Self, PixelError> {
        let expected = byte_count(width, height)?;
        if pixels.len() * 3 != expected {
            return Err(PixelError::SizeMismatch {
                expected,
                actual: pixels.len() * 3,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved `r, g, b` bytes.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, PixelError> {
        let expected = byte_count(width, height)?;
        if bytes.len() != expected {
            return Err(PixelError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| RgbColor::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Read exactly `width * height * 3` interleaved RGB bytes from `reader`.
    ///
    /// The buffer grows with the data actually read, so a short input fails
    /// with `UnexpectedEof` whatever the claimed dimensions.
    pub fn read_rgb<R: Read>(reader: R, width: u32, height: u32) -> Result<Self, PixelError> {
        let expected = byte_count(width, height)?;
        let mut bytes = Vec::new();
        reader.take(expected as u64).read_to_end(&mut bytes)?;
        if bytes.len() < expected {
            return Err(PixelError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("expected {} bytes of pixel data, got {}", expected, bytes.len()),
            )));
        }
        Self::from_rgb_bytes(width, height, &bytes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[RgbColor] {
        &self.pixels
    }

    /// Per-channel mean, truncated toward zero.
    pub fn average(&self) -> RgbColor {
        let (r, g, b) = self.pixels.iter().fold((0u64, 0u64, 0u64), |(r, g, b), px| {
            (
                r + u64::from(px.red),
                g + u64::from(px.green),
                b + u64::from(px.blue),
            )
        });
        // Construction guarantees at least one pixel.
        let n = self.pixels.len().max(1) as u64;
        RgbColor::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
    }
}

/// Number of RGB bytes in a `width` x `height` image.
fn byte_count(width: u32, height: u32) -> Result<usize, PixelError> {
    if width == 0 || height == 0 {
        return Err(PixelError::Empty { width, height });
    }
    usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h))
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or(PixelError::TooLarge { width, height })
}
