//! Observation preprocessing
//!
//! Agents usually consume a small grayscale version of the RGB frame.

use crate::render::Frame;

/// Luma of each pixel in `[0, 1]`, row-major
pub fn to_grayscale(frame: &Frame) -> Vec<f32> {
    frame
        .pixels
        .chunks_exact(Frame::CHANNELS)
        .map(|px| {
            (0.2125 * px[0] as f32 + 0.7154 * px[1] as f32 + 0.0721 * px[2] as f32) / 255.0
        })
        .collect()
}

/// Nearest-neighbour resize of a row-major single-channel image
pub fn downsample(values: &[f32], width: usize, height: usize, out_width: usize, out_height: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(out_width * out_height);
    if width == 0 || height == 0 {
        out.resize(out_width * out_height, 0.0);
        return out;
    }
    for oy in 0..out_height {
        let sy = (oy * height / out_height).min(height - 1);
        for ox in 0..out_width {
            let sx = (ox * width / out_width).min(width - 1);
            out.push(values[sy * width + sx]);
        }
    }
    out
}

/// Grayscale then resize: the usual pixel-agent input
pub fn preprocess(frame: &Frame, out_width: usize, out_height: usize) -> Vec<f32> {
    downsample(&to_grayscale(frame), frame.width, frame.height, out_width, out_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_extremes() {
        let white = Frame::filled(2, 2, [255, 255, 255]);
        let black = Frame::filled(2, 2, [0, 0, 0]);

        assert!(to_grayscale(&white).iter().all(|&v| (v - 1.0).abs() < 1e-3));
        assert!(to_grayscale(&black).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_downsample_picks_nearest() {
        // 4x2 image, columns 0..4 per row
        let values = [0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0];
        assert_eq!(downsample(&values, 4, 2, 2, 1), vec![0.0, 2.0]);
        assert_eq!(downsample(&values, 4, 2, 2, 2), vec![0.0, 2.0, 10.0, 12.0]);
    }

    #[test]
    fn test_preprocess_shape() {
        let frame = Frame::filled(180, 180, [128, 128, 128]);
        assert_eq!(preprocess(&frame, 80, 80).len(), 6400);
    }
}
