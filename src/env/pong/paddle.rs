//! Paddle movement and the single-player autopilot

use rand::Rng;

use super::{ball::Ball, types::PaddleMove};

/// A paddle on a fixed vertical line
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Centre line x (fixed)
    pub x: f32,
    /// Centre y
    pub y: f32,
    /// Vertical velocity applied this frame
    pub velocity: f32,
}

/// Vertical travel limits for a paddle's centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Travel {
    /// Highest centre position
    pub min_y: f32,
    /// Lowest centre position
    pub max_y: f32,
}

impl Travel {
    /// Limits for a paddle of `height` on a court of `screen_height`
    pub fn new(height: f32, screen_height: f32) -> Self {
        Self { min_y: height / 2.0, max_y: screen_height - height / 2.0 }
    }
}

impl Paddle {
    /// Create a stationary paddle
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, velocity: 0.0 }
    }

    /// Apply a player command: set velocity, integrate, clamp
    pub fn drive(&mut self, command: PaddleMove, speed: f32, travel: Travel) {
        self.velocity = command.velocity(speed);
        self.y = (self.y + self.velocity).clamp(travel.min_y, travel.max_y);
    }

    /// Computer-controlled move.
    ///
    /// Chases the ball's height while the ball heads this way faster than
    /// `track_threshold`, otherwise keeps its velocity. With probability
    /// `flip_rate` the velocity reverses for the frame. Bounces off the
    /// travel limits.
    pub fn autopilot(
        &mut self,
        ball: &Ball,
        speed: f32,
        track_threshold: f32,
        flip_rate: f64,
        travel: Travel,
        rng: &mut impl Rng,
    ) {
        if ball.vx > track_threshold {
            self.velocity = if self.y > ball.y {
                -speed
            } else if self.y < ball.y {
                speed
            } else {
                0.0
            };
        }
        if rng.gen::<f64>() < flip_rate {
            self.velocity = -self.velocity;
        }

        self.y += self.velocity;
        if self.y >= travel.max_y {
            self.y = travel.max_y;
            self.velocity = -self.velocity;
        }
        if self.y <= travel.min_y {
            self.y = travel.min_y;
            self.velocity = -self.velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn travel() -> Travel {
        Travel::new(40.0, 240.0)
    }

    #[test]
    fn test_drive_clamps() {
        let mut paddle = Paddle::new(10.0, 30.0);

        paddle.drive(PaddleMove::Up, 17.0, travel());
        assert_eq!(paddle.y, 20.0);
        assert_eq!(paddle.velocity, -17.0);

        paddle.drive(PaddleMove::NoMove, 17.0, travel());
        assert_eq!(paddle.y, 20.0);
        assert_eq!(paddle.velocity, 0.0);

        paddle.y = 215.0;
        paddle.drive(PaddleMove::Down, 17.0, travel());
        assert_eq!(paddle.y, 220.0);
    }

    #[test]
    fn test_autopilot_tracks_incoming_ball() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut paddle = Paddle::new(230.0, 120.0);
        let ball = Ball::new(100.0, 60.0, 8.0, 1.0);

        paddle.autopilot(&ball, 17.0, 0.0, 0.0, travel(), &mut rng);
        assert_eq!(paddle.velocity, -17.0);
        assert_eq!(paddle.y, 103.0);
    }

    #[test]
    fn test_autopilot_keeps_velocity_when_ball_leaves() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut paddle = Paddle::new(230.0, 120.0);
        paddle.velocity = 17.0;
        let ball = Ball::new(100.0, 60.0, -8.0, 1.0);

        paddle.autopilot(&ball, 17.0, 0.0, 0.0, travel(), &mut rng);
        assert_eq!(paddle.velocity, 17.0);
        assert_eq!(paddle.y, 137.0);
    }

    #[test]
    fn test_autopilot_flip_and_bounce() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut paddle = Paddle::new(230.0, 210.0);
        paddle.velocity = -17.0;
        let ball = Ball::new(100.0, 60.0, -8.0, 1.0);

        // Certain flip sends it down into the limit, which bounces it back
        paddle.autopilot(&ball, 17.0, 0.0, 1.0, travel(), &mut rng);
        assert_eq!(paddle.y, 220.0);
        assert_eq!(paddle.velocity, -17.0);
    }
}
