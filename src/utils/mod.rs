//! Utility functions and helpers

pub mod pacing;
pub mod preprocess;

pub use pacing::FrameClock;
pub use preprocess::{downsample, preprocess, to_grayscale};
