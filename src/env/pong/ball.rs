//! Ball integration and bounce geometry
//!
//! Bounces are resolved after the ball has moved a whole frame. When the
//! ball ends up past a wall or paddle plane, it is walked back along its
//! trajectory to the crossing point, and the crossing point decides
//! whether a paddle was hit.

use super::{paddle::Paddle, types::Side};

/// The ball, by centre position and per-frame velocity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Centre x
    pub x: f32,
    /// Centre y
    pub y: f32,
    /// Horizontal velocity, positive towards the right paddle
    pub vx: f32,
    /// Vertical velocity, positive downwards
    pub vy: f32,
    /// Set when a wall bounce happened this frame
    pub at_wall: bool,
    /// Set when a paddle bounce happened this frame
    pub at_paddle: bool,
}

/// Paddle and ball sizes plus speed caps used when resolving a paddle hit
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub struct HitRules {
    pub ball_size: f32,
    pub paddle_height: f32,
    pub speed_x_limit: f32,
    pub speed_y_limit: f32,
    pub speed_transfer: f32,
}

impl Ball {
    /// Ball at `(x, y)` with velocity `(vx, vy)`
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self { x, y, vx, vy, at_wall: false, at_paddle: false }
    }

    /// Integrate one frame of motion
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Bounce off the top or bottom wall, at most once per frame.
    ///
    /// `top` and `bottom` are the extreme centre heights. Returns whether a
    /// bounce happened.
    pub fn bounce_walls(&mut self, top: f32, bottom: f32) -> bool {
        self.at_wall = false;

        if self.y <= top {
            self.rewind_to_y(top, top - self.y);
        } else if self.y >= bottom {
            self.rewind_to_y(bottom, self.y - bottom);
        }
        self.at_wall
    }

    fn rewind_to_y(&mut self, wall_y: f32, overshoot: f32) {
        if self.vy != 0.0 {
            self.x -= overshoot * self.vx / self.vy.abs();
        }
        self.y = wall_y;
        self.vy = -self.vy;
        self.at_wall = true;
    }

    /// Bounce off `paddle` if the ball crossed its contact plane within the
    /// paddle's reach and no paddle was hit yet this frame.
    ///
    /// On a hit the ball is snapped to the contact plane, its horizontal
    /// velocity reverses and speeds up by a share of the paddle's speed, and
    /// the paddle's velocity is added to its vertical velocity. Returns
    /// whether a hit happened.
    pub fn bounce_paddle(&mut self, paddle: &Paddle, side: Side, rules: &HitRules) -> bool {
        let half_ball = rules.ball_size / 2.0;
        let (plane, overshoot) = match side {
            Side::Left => {
                let plane = paddle.x + half_ball;
                (plane, plane - self.x)
            }
            Side::Right => {
                let plane = paddle.x - half_ball;
                (plane, self.x - plane)
            }
        };
        if overshoot < 0.0 || self.at_paddle {
            return false;
        }

        let contact_y = if self.vx != 0.0 {
            self.y - overshoot * self.vy / self.vx.abs()
        } else {
            self.y
        };
        let reach = rules.paddle_height / 2.0 + half_ball;
        if !(paddle.y - reach < contact_y && contact_y < paddle.y + reach) {
            return false;
        }

        self.y = contact_y;
        self.x = plane;
        self.at_paddle = true;

        self.vx = -self.vx;
        let speed = self.vx.abs();
        if speed < rules.speed_x_limit {
            let boosted = (speed + paddle.velocity.abs() / rules.speed_transfer).min(rules.speed_x_limit);
            self.vx = boosted.copysign(self.vx);
        }

        self.vy += paddle.velocity;
        if self.vy.abs() >= rules.speed_y_limit {
            self.vy = rules.speed_y_limit.copysign(self.vy);
        }
        true
    }

    /// Replace an exactly-zero vertical velocity with 1 so the ball always
    /// travels between the walls
    pub fn ensure_vertical_motion(&mut self) {
        if self.vy == 0.0 {
            self.vy = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> HitRules {
        HitRules {
            ball_size: 8.0,
            paddle_height: 40.0,
            speed_x_limit: 10.0,
            speed_y_limit: 10.0,
            speed_transfer: 9.0,
        }
    }

    #[test]
    fn test_bounce_top_wall_rewinds_along_trajectory() {
        // Ball moved from (100, 6) to (104, 2); it crossed y = 4 at x = 102
        let mut ball = Ball::new(104.0, 2.0, 4.0, -4.0);

        assert!(ball.bounce_walls(4.0, 236.0));
        assert_eq!(ball.y, 4.0);
        assert_eq!(ball.x, 102.0);
        assert_eq!(ball.vy, 4.0);
        assert!(ball.at_wall);
    }

    #[test]
    fn test_bounce_bottom_wall_rewinds_along_trajectory() {
        // From (100, 234) to (96, 238); crossed y = 236 at x = 98
        let mut ball = Ball::new(96.0, 238.0, -4.0, 4.0);

        assert!(ball.bounce_walls(4.0, 236.0));
        assert_eq!(ball.y, 236.0);
        assert_eq!(ball.x, 98.0);
        assert_eq!(ball.vy, -4.0);
    }

    #[test]
    fn test_no_wall_bounce_mid_court() {
        let mut ball = Ball::new(120.0, 120.0, 8.0, 3.0);
        assert!(!ball.bounce_walls(4.0, 236.0));
        assert_eq!(ball.vy, 3.0);
        assert!(!ball.at_wall);
    }

    #[test]
    fn test_left_paddle_hit() {
        let paddle = Paddle { x: 10.0, y: 120.0, velocity: -17.0 };
        // Plane is x = 14; the ball is 4 past it moving (-8, 2), so it
        // crossed at y = 119
        let mut ball = Ball::new(10.0, 120.0, -8.0, 2.0);

        assert!(ball.bounce_paddle(&paddle, Side::Left, &rules()));
        assert_eq!(ball.x, 14.0);
        assert_eq!(ball.y, 119.0);
        // 8 + 17/9 = 9.89, still under the cap
        assert!((ball.vx - (8.0 + 17.0 / 9.0)).abs() < 1e-5);
        // 2 - 17 clamps to -10
        assert_eq!(ball.vy, -10.0);
        assert!(ball.at_paddle);
    }

    #[test]
    fn test_right_paddle_hit_caps_horizontal_speed() {
        let paddle = Paddle { x: 230.0, y: 120.0, velocity: 17.0 };
        let mut ball = Ball::new(228.0, 130.0, 9.5, 1.0);

        assert!(ball.bounce_paddle(&paddle, Side::Right, &rules()));
        assert_eq!(ball.x, 226.0);
        assert_eq!(ball.vx, -10.0);
        assert_eq!(ball.vy, 10.0);
    }

    #[test]
    fn test_paddle_miss() {
        let paddle = Paddle { x: 10.0, y: 120.0, velocity: 0.0 };
        // Crossing point far below the paddle's reach of 120 +/- 24
        let mut ball = Ball::new(12.0, 200.0, -8.0, 2.0);

        assert!(!ball.bounce_paddle(&paddle, Side::Left, &rules()));
        assert_eq!(ball.vx, -8.0);
        assert!(!ball.at_paddle);
    }

    #[test]
    fn test_only_one_paddle_hit_per_frame() {
        let paddle = Paddle { x: 10.0, y: 120.0, velocity: 0.0 };
        let mut ball = Ball::new(12.0, 120.0, -8.0, 2.0);
        ball.at_paddle = true;

        assert!(!ball.bounce_paddle(&paddle, Side::Left, &rules()));
    }

    #[test]
    fn test_ensure_vertical_motion() {
        let mut ball = Ball::new(0.0, 0.0, 8.0, 0.0);
        ball.ensure_vertical_motion();
        assert_eq!(ball.vy, 1.0);

        ball.vy = -3.0;
        ball.ensure_vertical_motion();
        assert_eq!(ball.vy, -3.0);
    }
}
