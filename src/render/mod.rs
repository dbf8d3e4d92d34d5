//! Render surface and asset collaborators
//!
//! The environments never touch a window or image files. They draw named
//! sprites onto a [`RenderTarget`] and read the surface back as a [`Frame`]
//! once per agent. [`Canvas`] is the headless software surface used by
//! default; a windowed front-end can implement the same trait.

use serde::{Deserialize, Serialize};

mod canvas;
mod frame;

pub use canvas::Canvas;
pub use frame::Frame;

/// Every drawable the two games use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    /// Full-screen backdrop
    Background,
    /// Pursuing hunter
    Hunter,
    /// The observing prey itself
    PreySelf,
    /// Any other live prey
    PreyOther,
    /// Bonus pickup
    Bonus,
    /// The observing player's paddle
    PaddleSelf,
    /// The opponent's paddle
    PaddleOther,
    /// Pong ball
    Ball,
}

/// Sprite dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Yields the dimensions of named sprites
pub trait AssetProvider {
    /// Size of `sprite` in pixels
    fn size(&self, sprite: Sprite) -> Size;
}

/// A drawable surface that can be read back as pixels
pub trait RenderTarget {
    /// Surface width in pixels
    fn width(&self) -> usize;

    /// Surface height in pixels
    fn height(&self) -> usize;

    /// Dimensions of `sprite` as loaded by this surface's assets
    fn sprite_size(&self, sprite: Sprite) -> Size;

    /// Paint the background over the whole surface
    fn clear(&mut self);

    /// Draw `sprite` with its top-left corner at `(x, y)`, clipped to the
    /// surface
    fn draw(&mut self, sprite: Sprite, x: i32, y: i32);

    /// Read the whole surface back
    fn read_pixels(&self) -> Frame;
}

/// Sprite dimensions and flat colours for the software canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub hunter: Size,
    pub prey: Size,
    pub bonus: Size,
    pub paddle: Size,
    pub ball: Size,
    pub background_rgb: [u8; 3],
    pub hunter_rgb: [u8; 3],
    pub prey_self_rgb: [u8; 3],
    pub prey_other_rgb: [u8; 3],
    pub bonus_rgb: [u8; 3],
    pub paddle_self_rgb: [u8; 3],
    pub paddle_other_rgb: [u8; 3],
    pub ball_rgb: [u8; 3],
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            hunter: Size::new(20, 20),
            prey: Size::new(20, 20),
            bonus: Size::new(10, 10),
            paddle: Size::new(8, 40),
            ball: Size::new(8, 8),
            background_rgb: [255, 255, 255],
            hunter_rgb: [200, 30, 30],
            prey_self_rgb: [0, 0, 0],
            prey_other_rgb: [128, 128, 128],
            bonus_rgb: [240, 200, 0],
            paddle_self_rgb: [0, 0, 0],
            paddle_other_rgb: [128, 128, 128],
            ball_rgb: [30, 30, 200],
        }
    }
}

impl SpriteSheet {
    /// Flat colour used to paint `sprite`
    pub fn color(&self, sprite: Sprite) -> [u8; 3] {
        match sprite {
            Sprite::Background => self.background_rgb,
            Sprite::Hunter => self.hunter_rgb,
            Sprite::PreySelf => self.prey_self_rgb,
            Sprite::PreyOther => self.prey_other_rgb,
            Sprite::Bonus => self.bonus_rgb,
            Sprite::PaddleSelf => self.paddle_self_rgb,
            Sprite::PaddleOther => self.paddle_other_rgb,
            Sprite::Ball => self.ball_rgb,
        }
    }
}

impl AssetProvider for SpriteSheet {
    fn size(&self, sprite: Sprite) -> Size {
        match sprite {
            // The backdrop is stretched to the surface by the canvas
            Sprite::Background => Size::new(0, 0),
            Sprite::Hunter => self.hunter,
            Sprite::PreySelf | Sprite::PreyOther => self.prey,
            Sprite::Bonus => self.bonus,
            Sprite::PaddleSelf | Sprite::PaddleOther => self.paddle,
            Sprite::Ball => self.ball,
        }
    }
}
