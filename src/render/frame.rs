//! Pixel buffers returned as observations

/// A full-frame RGB readback of a render surface.
///
/// Pixels are stored row-major, three bytes per pixel, so the byte at
/// `(y * width + x) * 3 + c` is channel `c` of the pixel at column `x`,
/// row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Row-major RGB bytes (`width * height * 3`)
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Number of bytes per pixel
    pub const CHANNELS: usize = 3;

    /// Create a frame filled with a single colour
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * Self::CHANNELS);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgb);
        }
        Self { width, height, pixels }
    }

    /// Observation shape as `[height, width, channels]`
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, Self::CHANNELS]
    }

    /// RGB value at `(x, y)`, or `None` outside the frame
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * Self::CHANNELS;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// Left-right mirror image of this frame.
    ///
    /// Used to give the right-hand pong player a "self on the left" view.
    pub fn mirrored(&self) -> Self {
        let row_len = self.width * Self::CHANNELS;
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.pixels.chunks_exact(row_len) {
            for px in row.chunks_exact(Self::CHANNELS).rev() {
                pixels.extend_from_slice(px);
            }
        }
        Self { width: self.width, height: self.height, pixels }
    }

    /// Count pixels that exactly match `rgb`
    pub fn count_color(&self, rgb: [u8; 3]) -> usize {
        self.pixels.chunks_exact(Self::CHANNELS).filter(|px| *px == rgb).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_frame() {
        let frame = Frame::filled(4, 3, [1, 2, 3]);
        assert_eq!(frame.shape(), [3, 4, 3]);
        assert_eq!(frame.pixels.len(), 36);
        assert_eq!(frame.pixel(3, 2), Some([1, 2, 3]));
        assert_eq!(frame.pixel(4, 0), None);
    }

    #[test]
    fn test_mirrored_swaps_columns() {
        let mut frame = Frame::filled(3, 2, [0, 0, 0]);
        // Mark (0, 1) red
        frame.pixels[3 * Frame::CHANNELS] = 255;

        let flipped = frame.mirrored();
        assert_eq!(flipped.pixel(2, 1), Some([255, 0, 0]));
        assert_eq!(flipped.pixel(0, 1), Some([0, 0, 0]));
        assert_eq!(flipped.mirrored(), frame, "Mirroring twice should be identity");
    }
}
