//! Hunter-Prey configuration
//!
//! Tuning constants for the pursuit game, with builder-style setters and
//! validation.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::EnvError;

/// Hunter-Prey configuration parameters
///
/// Default values reproduce the classic 180x180 arena with two slow,
/// noisy hunters and fast preys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HunterPreyConfig {
    /// Screen width in pixels
    pub screen_width: i32,

    /// Screen height in pixels
    pub screen_height: i32,

    /// Frame rate the driving loop should pace at
    pub fps: u32,

    /// Reward for a prey that survives the frame
    pub reward: f32,

    /// Reward for a prey captured this frame
    pub penalty: f32,

    /// Reward (and score) for picking up a bonus
    pub bonus: f32,

    /// Hunter speed (pixels/frame)
    pub hunter_speed: i32,

    /// Prey speed (pixels/frame)
    pub prey_speed: i32,

    /// Probability that a hunter ignores its target and moves randomly
    pub random_move_prob: f64,

    /// Hunters only pursue preys within this Euclidean radius
    pub detection_radius: i32,

    /// Probability of keeping the current target while the pursuit counter
    /// is positive
    pub pursuit_keep_prob: f64,

    /// Inclusive range the pursuit counter is redrawn from on retarget
    pub pursuit_steps: (i32, i32),

    /// Probability of spawning a bonus each frame while below the cap
    pub bonus_spawn_prob: f64,

    /// Maximum number of bonuses on screen at once
    pub max_bonuses: usize,

    /// Score added for every frame in which at least one prey survives
    pub survival_score: f32,
}

impl Default for HunterPreyConfig {
    fn default() -> Self {
        Self {
            screen_width: 180,
            screen_height: 180,
            fps: 20,
            reward: 1.0,
            penalty: -10.0,
            bonus: 10.0,
            hunter_speed: 4,
            prey_speed: 10,
            random_move_prob: 0.01,
            detection_radius: 90,
            pursuit_keep_prob: 0.8,
            pursuit_steps: (7, 12),
            bonus_spawn_prob: 1.0,
            max_bonuses: 2,
            survival_score: 1.0,
        }
    }
}

impl HunterPreyConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(EnvError::invalid_config(msg).into()) };

        if self.screen_width <= 0 || self.screen_height <= 0 {
            return invalid("screen dimensions must be positive");
        }
        if self.fps == 0 {
            return invalid("fps must be positive");
        }
        if self.hunter_speed < 0 || self.prey_speed < 0 {
            return invalid("speeds must be non-negative");
        }
        if self.detection_radius < 0 {
            return invalid("detection_radius must be non-negative");
        }
        for (name, p) in [
            ("random_move_prob", self.random_move_prob),
            ("pursuit_keep_prob", self.pursuit_keep_prob),
            ("bonus_spawn_prob", self.bonus_spawn_prob),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(EnvError::invalid_config(format!("{} must be in [0, 1]", name)).into());
            }
        }
        let (lo, hi) = self.pursuit_steps;
        if lo < 0 || lo > hi {
            return invalid("pursuit_steps must be a non-negative range with lo <= hi");
        }
        Ok(())
    }

    /// Set screen size
    pub fn screen(mut self, width: i32, height: i32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Set frame rate
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set hunter speed
    pub fn hunter_speed(mut self, speed: i32) -> Self {
        self.hunter_speed = speed;
        self
    }

    /// Set prey speed
    pub fn prey_speed(mut self, speed: i32) -> Self {
        self.prey_speed = speed;
        self
    }

    /// Set hunter noise probability
    pub fn random_move_prob(mut self, p: f64) -> Self {
        self.random_move_prob = p;
        self
    }

    /// Set detection radius
    pub fn detection_radius(mut self, radius: i32) -> Self {
        self.detection_radius = radius;
        self
    }

    /// Set bonus spawn probability
    pub fn bonus_spawn_prob(mut self, p: f64) -> Self {
        self.bonus_spawn_prob = p;
        self
    }

    /// Set bonus cap
    pub fn max_bonuses(mut self, n: usize) -> Self {
        self.max_bonuses = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HunterPreyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.screen_width, 180);
        assert_eq!(config.penalty, -10.0);
        assert_eq!(config.pursuit_steps, (7, 12));
    }

    #[test]
    fn test_config_validation() {
        assert!(HunterPreyConfig::new().fps(0).validate().is_err());
        assert!(HunterPreyConfig::new().random_move_prob(1.5).validate().is_err());
        assert!(HunterPreyConfig::new().screen(0, 10).validate().is_err());
        assert!(HunterPreyConfig::new().hunter_speed(-1).validate().is_err());

        let mut config = HunterPreyConfig::new();
        config.pursuit_steps = (5, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = HunterPreyConfig::new().detection_radius(40).max_bonuses(0);
        let json = serde_json::to_string(&config).unwrap();
        let back: HunterPreyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
