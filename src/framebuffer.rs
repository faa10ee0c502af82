//! Borrowed 2D view over the renderer's pixel buffer.

use crate::color::Rgb;
use crate::error::RenderError;

/// Wraps the caller's pixel slice with its dimensions. The buffer is never
/// reallocated or resized through this view.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [Rgb],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(pixels: &'a mut [Rgb], width: usize, height: usize) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyFramebuffer);
        }
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(RenderError::FramebufferSize {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Write a pixel, ignoring coordinates outside the buffer.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    /// Fill rows `y0..=y1` of column `x`. Callers clamp the range first.
    #[inline]
    pub(crate) fn fill_column(&mut self, x: usize, y0: usize, y1: usize, color: Rgb) {
        let mut idx = y0 * self.width + x;
        for _y in y0..=y1 {
            self.pixels[idx] = color;
            idx += self.width;
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_is_an_error() {
        let mut buf = vec![0u32; 10];
        assert_eq!(
            FrameBuffer::new(&mut buf, 4, 4).err(),
            Some(RenderError::FramebufferSize {
                len: 10,
                width: 4,
                height: 4
            })
        );
        assert_eq!(
            FrameBuffer::new(&mut buf, 0, 4).err(),
            Some(RenderError::EmptyFramebuffer)
        );
    }

    #[test]
    fn put_pixel_drops_out_of_range_writes() {
        let mut buf = vec![0u32; 12];
        let mut fb = FrameBuffer::new(&mut buf, 4, 3).unwrap();
        fb.put_pixel(-1, 0, 7);
        fb.put_pixel(4, 0, 7);
        fb.put_pixel(0, 3, 7);
        fb.put_pixel(3, 2, 7);
        assert_eq!(fb.pixels().iter().filter(|&&p| p == 7).count(), 1);
        assert_eq!(fb.pixel(3, 2), 7);
    }

    #[test]
    fn fill_column_is_inclusive() {
        let mut buf = vec![0u32; 12];
        let mut fb = FrameBuffer::new(&mut buf, 4, 3).unwrap();
        fb.fill_column(1, 0, 2, 9);
        assert_eq!(fb.pixel(1, 0), 9);
        assert_eq!(fb.pixel(1, 2), 9);
        assert_eq!(fb.pixel(0, 1), 0);
    }
}
