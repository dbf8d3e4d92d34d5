//! Multi-agent Hunter-Prey environment
//!
//! Preys are the agents: each step takes one move per prey while
//! computer-controlled hunters chase them.
//! - Pixel-space arena with integer positions clamped to the screen
//! - Hunters pursue the nearest live prey within a detection radius
//! - Bonuses spawn at random and are picked up by touching them
//! - Rewards: +REWARD per surviving frame, PENALTY on capture, +BONUS per pickup
//! - The episode ends when every prey is captured; the world then
//!   reinitializes while the total score and frame rate carry over

pub use config::HunterPreyConfig;
pub use entities::{greedy_move, nearest_live_prey, Bonus, Hunter, Prey};
pub use environment::{Carryover, HunterPrey};
pub use types::{Move, Position};

mod config;
mod entities;
mod environment;
mod types;
