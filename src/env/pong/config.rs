//! Pong configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::EnvError;

/// Pong configuration parameters
///
/// Defaults reproduce the classic 240x240 court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongConfig {
    /// Court width in pixels
    pub screen_width: i32,

    /// Court height in pixels
    pub screen_height: i32,

    /// Frame rate the driving loop should pace at
    pub fps: u32,

    /// Reward for the player who scores
    pub reward: f32,

    /// Reward for the player who concedes
    pub penalty: f32,

    /// Left paddle speed (pixels/frame)
    pub paddle_speed_1: f32,

    /// Right paddle speed (pixels/frame)
    pub paddle_speed_2: f32,

    /// Horizontal ball speed at serve
    pub ball_speed_x: f32,

    /// Paddle hits stop adding horizontal speed at this magnitude
    pub ball_speed_x_limit: f32,

    /// Vertical ball speed is clamped to this magnitude after a paddle hit
    pub ball_speed_y_limit: f32,

    /// Distance of each paddle's centre line from its edge of the court
    pub paddle_inset: f32,

    /// Per-frame probability that the autopilot reverses its velocity
    pub autopilot_flip_rate: f64,

    /// The autopilot tracks the ball once its horizontal velocity (toward
    /// the autopilot) exceeds this
    pub autopilot_track_threshold: f32,

    /// A paddle hit adds `|paddle velocity| / paddle_speed_transfer` to the
    /// ball's horizontal speed
    pub paddle_speed_transfer: f32,

    /// Both totals roll over to zero once either reaches this
    pub score_reset_threshold: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            screen_width: 240,
            screen_height: 240,
            fps: 20,
            reward: 10.0,
            penalty: -10.0,
            paddle_speed_1: 17.0,
            paddle_speed_2: 17.0,
            ball_speed_x: 8.0,
            ball_speed_x_limit: 10.0,
            ball_speed_y_limit: 10.0,
            paddle_inset: 10.0,
            autopilot_flip_rate: 0.15,
            autopilot_track_threshold: 0.0,
            paddle_speed_transfer: 9.0,
            score_reset_threshold: 210.0,
        }
    }
}

impl PongConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let check = |ok: bool, msg: &str| -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(anyhow!(EnvError::invalid_config(msg)))
            }
        };

        check(self.screen_width > 0 && self.screen_height > 0, "screen dimensions must be positive")?;
        check(self.fps > 0, "fps must be positive")?;
        check(self.paddle_speed_1 >= 0.0 && self.paddle_speed_2 >= 0.0, "paddle speeds must be non-negative")?;
        check(self.ball_speed_x > 0.0, "ball_speed_x must be positive")?;
        check(
            self.ball_speed_x_limit > 0.0 && self.ball_speed_y_limit > 0.0,
            "ball speed limits must be positive",
        )?;
        check(self.paddle_speed_transfer > 0.0, "paddle_speed_transfer must be positive")?;
        check((0.0..=1.0).contains(&self.autopilot_flip_rate), "autopilot_flip_rate must be in [0, 1]")?;
        check(
            self.paddle_inset >= 0.0 && 2.0 * self.paddle_inset < self.screen_width as f32,
            "paddle_inset must leave room between the paddles",
        )?;
        check(self.score_reset_threshold > 0.0, "score_reset_threshold must be positive")?;
        Ok(())
    }

    /// Set court size
    pub fn screen(mut self, width: i32, height: i32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Set both paddle speeds
    pub fn paddle_speeds(mut self, left: f32, right: f32) -> Self {
        self.paddle_speed_1 = left;
        self.paddle_speed_2 = right;
        self
    }

    /// Set serve speed
    pub fn ball_speed_x(mut self, speed: f32) -> Self {
        self.ball_speed_x = speed;
        self
    }

    /// Set autopilot jitter
    pub fn autopilot_flip_rate(mut self, rate: f64) -> Self {
        self.autopilot_flip_rate = rate;
        self
    }

    /// Set score rollover threshold
    pub fn score_reset_threshold(mut self, threshold: f32) -> Self {
        self.score_reset_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PongConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_speed_1, 17.0);
        assert_eq!(config.score_reset_threshold, 210.0);
    }

    #[test]
    fn test_config_validation() {
        assert!(PongConfig::new().ball_speed_x(0.0).validate().is_err());
        assert!(PongConfig::new().autopilot_flip_rate(-0.1).validate().is_err());
        assert!(PongConfig::new().screen(10, 240).validate().is_err());

        let err = PongConfig::new().paddle_speeds(-1.0, 17.0).validate().unwrap_err();
        assert!(matches!(err.downcast_ref::<EnvError>(), Some(EnvError::InvalidConfig(_))));
    }
}
