//! Two-player Pong environment
//!
//! A paddle-ball game with one pixel observation per player.
//! - Each player sees its own paddle drawn differently from the opponent's
//! - Player 2's view is mirrored so both players play "from the left"
//! - Single-player mode hands the right paddle to a jittery autopilot
//! - Rewards: REWARD to the scorer, PENALTY to the other player
//! - Totals carry across points and roll over to zero at a threshold

pub use ball::{Ball, HitRules};
pub use config::PongConfig;
pub use environment::{Pong, PongCarryover};
pub use paddle::{Paddle, Travel};
pub use types::{PaddleMove, Side};

mod ball;
mod config;
mod environment;
mod paddle;
mod types;
