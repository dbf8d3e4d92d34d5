//! Pong environment implementation
//!
//! Two paddles on fixed lines near the left and right edges. In
//! single-player mode the right paddle runs an autopilot.

use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    ball::{Ball, HitRules},
    config::PongConfig,
    paddle::{Paddle, Travel},
    types::{PaddleMove, Side},
};
use crate::{
    env::{check_action_count, Environment, SpaceInfo, SpaceType, StepInfo, StepResult},
    render::{Canvas, Frame, RenderTarget, Size, Sprite, SpriteSheet},
    EnvError,
};

/// Fields carried over when a point is replayed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PongCarryover {
    /// Running totals for (left, right)
    pub scores: [f32; 2],
    /// Paddle centres to keep; `None` re-centres both paddles
    pub paddle_y: Option<[f32; 2]>,
}

/// Two-paddle environment with mirrored per-player observations
#[derive(Debug, Clone)]
pub struct Pong<R: RenderTarget = Canvas> {
    /// Tuning constants
    pub config: PongConfig,
    /// Whether both paddles are externally controlled
    pub two_players: bool,
    /// Left paddle (player 1)
    pub paddle_1: Paddle,
    /// Right paddle (player 2 or autopilot)
    pub paddle_2: Paddle,
    /// The ball
    pub ball: Ball,
    /// Running totals for (left, right)
    pub scores: [f32; 2],
    /// Points played so far
    pub episode: usize,
    /// Frames elapsed in the current point
    pub steps: usize,
    paddle: Size,
    ball_size: f32,
    renderer: R,
    rng: StdRng,
}

impl Pong<Canvas> {
    /// Create a court with default tuning and a headless canvas
    pub fn new(two_players: bool) -> Result<Self> {
        Self::with_config(two_players, PongConfig::default())
    }

    /// Create a court with custom tuning and a headless canvas
    pub fn with_config(two_players: bool, config: PongConfig) -> Result<Self> {
        let canvas = Canvas::new(
            config.screen_width.max(0) as usize,
            config.screen_height.max(0) as usize,
            SpriteSheet::default(),
        );
        Self::with_renderer(two_players, config, canvas, StdRng::from_entropy())
    }

    /// Deterministic variant of [`Pong::with_config`]
    pub fn with_seed(two_players: bool, config: PongConfig, seed: u64) -> Result<Self> {
        let canvas = Canvas::new(
            config.screen_width.max(0) as usize,
            config.screen_height.max(0) as usize,
            SpriteSheet::default(),
        );
        Self::with_renderer(two_players, config, canvas, StdRng::seed_from_u64(seed))
    }
}

impl<R: RenderTarget> Pong<R> {
    /// Create a court drawing onto `renderer`
    pub fn with_renderer(two_players: bool, config: PongConfig, renderer: R, rng: StdRng) -> Result<Self> {
        config.validate()?;

        let paddle = renderer.sprite_size(Sprite::PaddleSelf);
        let ball = renderer.sprite_size(Sprite::Ball);
        if paddle.width <= 0 || paddle.height <= 0 || ball.width <= 0 || ball.height <= 0 {
            return Err(EnvError::invalid_config("paddle and ball sprites must have a positive size").into());
        }
        if paddle.height > config.screen_height || ball.height > config.screen_height {
            return Err(EnvError::invalid_config("paddle or ball sprite is taller than the court").into());
        }

        let width = config.screen_width as f32;
        let centre = config.screen_height as f32 / 2.0;
        let mut env = Self {
            paddle_1: Paddle::new(config.paddle_inset, centre),
            paddle_2: Paddle::new(width - config.paddle_inset, centre),
            ball: Ball::new(width / 2.0, centre, 0.0, 0.0),
            config,
            two_players,
            scores: [0.0, 0.0],
            episode: 0,
            steps: 0,
            paddle,
            ball_size: ball.width as f32,
            renderer,
            rng,
        };
        env.ball = env.serve();
        Ok(env)
    }

    /// The render target this court draws onto
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Replay from a fresh serve.
    ///
    /// The ball is re-served, paddle velocities are zeroed and the carried
    /// fields are restored.
    pub fn reset_point(&mut self, carry: PongCarryover) {
        let centre = self.config.screen_height as f32 / 2.0;
        let [y1, y2] = carry.paddle_y.unwrap_or([centre, centre]);
        self.paddle_1 = Paddle::new(self.paddle_1.x, y1);
        self.paddle_2 = Paddle::new(self.paddle_2.x, y2);
        self.ball = self.serve();
        self.scores = carry.scores;
        self.episode += 1;
        self.steps = 0;
        tracing::debug!(episode = self.episode, scores = ?self.scores, "pong point reset");
    }

    /// Execute one frame.
    ///
    /// Takes two commands in two-player mode, one (the left paddle's)
    /// otherwise. Always returns two observations and two rewards.
    pub fn step(&mut self, actions: &[PaddleMove]) -> Result<StepResult<[f32; 2]>> {
        check_action_count(self.num_agents(), actions.len())?;

        let travel = Travel::new(self.paddle.height as f32, self.config.screen_height as f32);
        self.paddle_1.drive(actions[0], self.config.paddle_speed_1, travel);
        if self.two_players {
            self.paddle_2.drive(actions[1], self.config.paddle_speed_2, travel);
        } else {
            self.paddle_2.autopilot(
                &self.ball,
                self.config.paddle_speed_2,
                self.config.autopilot_track_threshold,
                self.config.autopilot_flip_rate,
                travel,
                &mut self.rng,
            );
        }

        self.ball.advance();
        let half_ball = self.ball_size / 2.0;
        self.ball.bounce_walls(half_ball, self.config.screen_height as f32 - half_ball);

        let rules = HitRules {
            ball_size: self.ball_size,
            paddle_height: self.paddle.height as f32,
            speed_x_limit: self.config.ball_speed_x_limit,
            speed_y_limit: self.config.ball_speed_y_limit,
            speed_transfer: self.config.paddle_speed_transfer,
        };
        self.ball.at_paddle = false;
        if self.ball.bounce_paddle(&self.paddle_1, Side::Left, &rules) {
            tracing::trace!(vx = self.ball.vx, vy = self.ball.vy, "left paddle hit");
        }
        if self.ball.bounce_paddle(&self.paddle_2, Side::Right, &rules) {
            tracing::trace!(vx = self.ball.vx, vy = self.ball.vy, "right paddle hit");
        }
        self.ball.ensure_vertical_motion();

        let observations = Vec::from(self.render());
        self.steps += 1;

        let scorer = if self.ball.x < half_ball {
            Some(Side::Right)
        } else if self.ball.x > self.config.screen_width as f32 - half_ball {
            Some(Side::Left)
        } else {
            None
        };

        let (reward, penalty) = (self.config.reward, self.config.penalty);
        let rewards = match scorer {
            Some(Side::Left) => [reward, penalty],
            Some(Side::Right) => [penalty, reward],
            None => [0.0, 0.0],
        };
        if let Some(side) = scorer {
            self.score_point(side);
        }
        let terminal = scorer.is_some();

        Ok(StepResult {
            observations,
            rewards: rewards.to_vec(),
            terminated: vec![terminal; 2],
            active_agents: vec![true; 2],
            score: self.scores,
            episode_over: terminal,
            info: StepInfo { episode: self.episode, steps: self.steps },
        })
    }

    /// Render both players' observations.
    ///
    /// Each player sees its own paddle as [`Sprite::PaddleSelf`]; player 2's
    /// frame is mirrored left-right so both see themselves on the left.
    pub fn render(&mut self) -> [Frame; 2] {
        let ball = Size::new(self.ball_size as i32, self.ball_size as i32);
        let ball_at = self.sprite_origin(self.ball.x, self.ball.y, ball);
        let left_at = self.sprite_origin(self.paddle_1.x, self.paddle_1.y, self.paddle);
        let right_at = self.sprite_origin(self.paddle_2.x, self.paddle_2.y, self.paddle);

        self.renderer.clear();
        self.renderer.draw(Sprite::Ball, ball_at.0, ball_at.1);

        self.renderer.draw(Sprite::PaddleSelf, left_at.0, left_at.1);
        self.renderer.draw(Sprite::PaddleOther, right_at.0, right_at.1);
        let left_view = self.renderer.read_pixels();

        self.renderer.draw(Sprite::PaddleOther, left_at.0, left_at.1);
        self.renderer.draw(Sprite::PaddleSelf, right_at.0, right_at.1);
        let right_view = self.renderer.read_pixels().mirrored();

        [left_view, right_view]
    }

    fn sprite_origin(&self, centre_x: f32, centre_y: f32, size: Size) -> (i32, i32) {
        (
            (centre_x - size.width as f32 / 2.0).floor() as i32,
            (centre_y - size.height as f32 / 2.0).floor() as i32,
        )
    }

    /// Fresh serve from a random side toward the other
    fn serve(&mut self) -> Ball {
        let width = self.config.screen_width as f32;
        let speed = self.config.ball_speed_x;
        let (x, vx) = if self.rng.gen::<f64>() < 0.5 {
            (width * 3.0 / 4.0, -speed)
        } else {
            (width / 4.0, speed)
        };
        let spread = (speed / 3.0).trunc() as i32;
        let vy = self.rng.gen_range(-spread..=spread) as f32;
        let mut ball = Ball::new(x, self.config.screen_height as f32 / 2.0, vx, vy);
        ball.ensure_vertical_motion();
        ball
    }

    fn score_point(&mut self, scorer: Side) {
        let mut scores = self.scores;
        match scorer {
            Side::Left => scores[0] += self.config.reward,
            Side::Right => scores[1] += self.config.reward,
        }

        let carry = if scores[0].max(scores[1]) >= self.config.score_reset_threshold {
            tracing::info!(scores = ?scores, "score threshold reached, totals reset");
            PongCarryover { scores: [0.0, 0.0], paddle_y: None }
        } else {
            PongCarryover { scores, paddle_y: Some([self.paddle_1.y, self.paddle_2.y]) }
        };
        self.reset_point(carry);
    }
}

impl<R: RenderTarget> Environment for Pong<R> {
    type Action = PaddleMove;
    type Score = [f32; 2];

    fn num_agents(&self) -> usize {
        if self.two_players {
            2
        } else {
            1
        }
    }

    fn reset(&mut self) -> Result<Vec<Frame>> {
        self.reset_point(PongCarryover { scores: [0.0, 0.0], paddle_y: None });
        self.episode = 0;
        Ok(Vec::from(self.render()))
    }

    fn step(&mut self, actions: &[PaddleMove]) -> Result<StepResult<[f32; 2]>> {
        self.step(actions)
    }

    fn observation_space(&self) -> SpaceInfo {
        SpaceInfo {
            shape: vec![self.renderer.height(), self.renderer.width(), Frame::CHANNELS],
            dtype: SpaceType::Pixels,
        }
    }

    fn action_space(&self) -> SpaceInfo {
        SpaceInfo { shape: vec![], dtype: SpaceType::Discrete(PaddleMove::COUNT) }
    }
}
