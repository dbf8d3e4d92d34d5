//! Headless software render surface

use super::{AssetProvider, Frame, RenderTarget, Size, Sprite, SpriteSheet};

/// RGB software surface that paints each sprite as a solid rectangle
#[derive(Debug, Clone)]
pub struct Canvas {
    sheet: SpriteSheet,
    frame: Frame,
}

impl Canvas {
    /// Create a canvas of the given size, initially cleared to the background
    pub fn new(width: usize, height: usize, sheet: SpriteSheet) -> Self {
        let frame = Frame::filled(width, height, sheet.background_rgb);
        Self { sheet, frame }
    }

    /// The sprite sheet this canvas paints with
    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }
}

impl RenderTarget for Canvas {
    fn width(&self) -> usize {
        self.frame.width
    }

    fn height(&self) -> usize {
        self.frame.height
    }

    fn sprite_size(&self, sprite: Sprite) -> Size {
        self.sheet.size(sprite)
    }

    fn clear(&mut self) {
        let rgb = self.sheet.background_rgb;
        for px in self.frame.pixels.chunks_exact_mut(Frame::CHANNELS) {
            px.copy_from_slice(&rgb);
        }
    }

    fn draw(&mut self, sprite: Sprite, x: i32, y: i32) {
        if sprite == Sprite::Background {
            self.clear();
            return;
        }

        let size = self.sheet.size(sprite);
        let rgb = self.sheet.color(sprite);
        let (w, h) = (self.frame.width as i32, self.frame.height as i32);

        let x0 = x.clamp(0, w);
        let x1 = (x + size.width).clamp(0, w).max(x0);
        let y0 = y.clamp(0, h);
        let y1 = (y + size.height).clamp(0, h).max(y0);

        for row in y0..y1 {
            let start = (row as usize * self.frame.width + x0 as usize) * Frame::CHANNELS;
            let end = (row as usize * self.frame.width + x1 as usize) * Frame::CHANNELS;
            for px in self.frame.pixels[start..end].chunks_exact_mut(Frame::CHANNELS) {
                px.copy_from_slice(&rgb);
            }
        }
    }

    fn read_pixels(&self) -> Frame {
        self.frame.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_paints_sprite_rectangle() {
        let sheet = SpriteSheet::default();
        let bonus_rgb = sheet.bonus_rgb;
        let mut canvas = Canvas::new(50, 40, sheet);

        canvas.draw(Sprite::Bonus, 5, 6);
        let frame = canvas.read_pixels();

        assert_eq!(frame.pixel(5, 6), Some(bonus_rgb));
        assert_eq!(frame.pixel(14, 15), Some(bonus_rgb));
        assert_ne!(frame.pixel(15, 15), Some(bonus_rgb));
        assert_eq!(frame.count_color(bonus_rgb), 100);
    }

    #[test]
    fn test_draw_clips_at_edges() {
        let sheet = SpriteSheet::default();
        let ball_rgb = sheet.ball_rgb;
        let mut canvas = Canvas::new(20, 20, sheet);

        // Half the ball hangs off the left edge
        canvas.draw(Sprite::Ball, -4, 0);
        assert_eq!(canvas.read_pixels().count_color(ball_rgb), 32);

        // Fully off-surface draws are ignored
        canvas.clear();
        canvas.draw(Sprite::Ball, 100, 100);
        assert_eq!(canvas.read_pixels().count_color(ball_rgb), 0);
    }

    #[test]
    fn test_draw_ignores_inverted_sprite() {
        let sheet = SpriteSheet { ball: Size::new(-8, -8), ..SpriteSheet::default() };
        let ball_rgb = sheet.ball_rgb;
        let mut canvas = Canvas::new(20, 20, sheet);

        canvas.draw(Sprite::Ball, 10, 10);
        assert_eq!(canvas.read_pixels().count_color(ball_rgb), 0);
    }

    #[test]
    fn test_clear_restores_background() {
        let sheet = SpriteSheet::default();
        let bg = sheet.background_rgb;
        let mut canvas = Canvas::new(10, 10, sheet);

        canvas.draw(Sprite::Hunter, 0, 0);
        canvas.clear();
        assert_eq!(canvas.read_pixels().count_color(bg), 100);
    }
}
