use crate::core::data::canvas_size::CanvasSize;
use thiserror::Error;

pub type PixelBufferData = Vec<u8>;

pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("canvas size {canvas_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

/// Packed RGB frame, three bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Number of bytes a frame of `size` occupies.
    #[must_use]
    pub fn byte_len(size: CanvasSize) -> usize {
        size.pixel_count() as usize * BYTES_PER_PIXEL
    }

    pub fn from_data(size: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = Self::byte_len(size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    /// Rows of `width * 3` bytes, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.buffer
            .chunks_exact(self.size.width() as usize * BYTES_PER_PIXEL)
    }
}
