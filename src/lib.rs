//! # Arcade Envs
//!
//! Pixel-observation arcade games for multi-agent reinforcement learning.
//!
//! Two environments share one frame-stepped interface:
//! - [`env::hunter_prey::HunterPrey`]: preys (the agents) evade
//!   computer-controlled hunters and collect bonuses
//! - [`env::pong::Pong`]: two paddles, or one paddle against an autopilot
//!
//! Each `step` takes one discrete action per agent and returns one rendered
//! frame, one reward and one terminal flag per agent plus the running score.
//! Episodes reset themselves; scores carry over.
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_envs::prelude::*;
//!
//! let mut env = HunterPrey::new(2, 2).unwrap();
//! let result = env.step(&[Move::Left, Move::NoMove]).unwrap();
//! assert_eq!(result.observations.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Environment traits and implementations
pub mod env;

/// Error kinds
pub mod error;

/// Per-frame action sources
pub mod input;

/// Render surfaces, sprites and pixel frames
pub mod render;

/// Utility functions and helpers
pub mod utils;

pub use error::EnvError;

/// Prelude module for convenient imports
///
/// This module re-exports commonly used types and traits for convenience.
pub mod prelude {
    pub use crate::env::hunter_prey::{HunterPrey, HunterPreyConfig, Move};
    pub use crate::env::pong::{PaddleMove, Pong, PongConfig};
    pub use crate::env::{Environment, StepResult};
    pub use crate::input::{ActionSource, RandomActions, ScriptedActions};
    pub use crate::render::{Canvas, Frame, RenderTarget, Sprite, SpriteSheet};
    pub use crate::EnvError;
}

/// Current version of arcade-envs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
