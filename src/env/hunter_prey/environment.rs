//! Hunter-Prey environment implementation
//!
//! This module implements the HunterPrey struct and the Environment trait.
//! Preys are the learning agents; hunters run the pursuit heuristic.

use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    config::HunterPreyConfig,
    entities::{Bonus, Hunter, Prey},
    types::{Move, Position},
};
use crate::{
    env::{check_action_count, Environment, SpaceInfo, SpaceType, StepInfo, StepResult},
    render::{Canvas, Frame, RenderTarget, Size, Sprite, SpriteSheet},
    EnvError,
};

/// Fields carried over when an episode is reinitialized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carryover {
    /// Score accumulated across episodes
    pub total_score: f32,
    /// Frame rate setting
    pub fps: u32,
}

/// Sprite sizes cached from the render target at construction
#[derive(Debug, Clone, Copy)]
struct Geometry {
    hunter: Size,
    prey: Size,
    bonus: Size,
}

/// Multi-agent pursuit environment
#[derive(Debug, Clone)]
pub struct HunterPrey<R: RenderTarget = Canvas> {
    /// Tuning constants
    pub config: HunterPreyConfig,
    /// Hunters with their pursuit state
    pub hunters: Vec<Hunter>,
    /// Preys, one per agent slot
    pub preys: Vec<Prey>,
    /// Active bonuses
    pub bonuses: Vec<Bonus>,
    /// Score accumulated across episodes
    pub total_score: f32,
    /// Episode counter
    pub episode: usize,
    /// Step counter for the current episode
    pub steps: usize,
    fps: u32,
    geometry: Geometry,
    renderer: R,
    rng: StdRng,
}

impl HunterPrey<Canvas> {
    /// Create an environment with default tuning and a headless canvas
    pub fn new(num_hunters: usize, num_preys: usize) -> Result<Self> {
        Self::with_config(num_hunters, num_preys, HunterPreyConfig::default())
    }

    /// Create an environment with custom tuning and a headless canvas
    pub fn with_config(num_hunters: usize, num_preys: usize, config: HunterPreyConfig) -> Result<Self> {
        let canvas = Canvas::new(
            config.screen_width.max(0) as usize,
            config.screen_height.max(0) as usize,
            SpriteSheet::default(),
        );
        Self::with_renderer(num_hunters, num_preys, config, canvas, StdRng::from_entropy())
    }

    /// Deterministic variant of [`HunterPrey::with_config`]
    pub fn with_seed(
        num_hunters: usize,
        num_preys: usize,
        config: HunterPreyConfig,
        seed: u64,
    ) -> Result<Self> {
        let canvas = Canvas::new(
            config.screen_width.max(0) as usize,
            config.screen_height.max(0) as usize,
            SpriteSheet::default(),
        );
        Self::with_renderer(num_hunters, num_preys, config, canvas, StdRng::seed_from_u64(seed))
    }
}

impl<R: RenderTarget> HunterPrey<R> {
    /// Create an environment drawing onto `renderer`
    pub fn with_renderer(
        num_hunters: usize,
        num_preys: usize,
        config: HunterPreyConfig,
        renderer: R,
        rng: StdRng,
    ) -> Result<Self> {
        config.validate()?;
        if num_preys == 0 {
            return Err(EnvError::invalid_config("num_preys must be positive").into());
        }

        let geometry = Geometry {
            hunter: renderer.sprite_size(Sprite::Hunter),
            prey: renderer.sprite_size(Sprite::PreySelf),
            bonus: renderer.sprite_size(Sprite::Bonus),
        };
        for (name, size) in [("hunter", geometry.hunter), ("prey", geometry.prey), ("bonus", geometry.bonus)] {
            if size.width <= 0 || size.height <= 0 {
                return Err(EnvError::invalid_config(format!("{} sprite must have a positive size", name)).into());
            }
            if size.width > config.screen_width || size.height > config.screen_height {
                return Err(EnvError::invalid_config(format!("{} sprite is larger than the screen", name)).into());
            }
        }

        let fps = config.fps;
        let mut env = Self {
            config,
            hunters: Vec::with_capacity(num_hunters),
            preys: Vec::with_capacity(num_preys),
            bonuses: Vec::new(),
            total_score: 0.0,
            episode: 0,
            steps: 0,
            fps,
            geometry,
            renderer,
            rng,
        };
        env.populate(num_hunters, num_preys);
        Ok(env)
    }

    /// Frame rate the driving loop should pace at
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Change the pacing frame rate; survives episode resets
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    /// Number of preys (agent slots)
    pub fn num_preys(&self) -> usize {
        self.preys.len()
    }

    /// Number of hunters
    pub fn num_hunters(&self) -> usize {
        self.hunters.len()
    }

    /// Alive flag per prey slot
    pub fn alive(&self) -> Vec<bool> {
        self.preys.iter().map(|p| p.alive).collect()
    }

    /// The render target this environment draws onto
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Reinitialize the world for a new episode.
    ///
    /// Positions, alive flags, pursuit state and bonuses are redrawn; the
    /// carried fields are restored verbatim.
    pub fn reset_episode(&mut self, carry: Carryover) {
        let (num_hunters, num_preys) = (self.hunters.len(), self.preys.len());
        self.populate(num_hunters, num_preys);
        self.total_score = carry.total_score;
        self.fps = carry.fps;
        self.episode += 1;
        self.steps = 0;
        tracing::debug!(episode = self.episode, total_score = self.total_score, "hunter-prey episode reset");
    }

    /// Execute one frame.
    ///
    /// `actions` holds one move per prey slot; moves for dead preys are
    /// ignored.
    pub fn step(&mut self, actions: &[Move]) -> Result<StepResult<f32>> {
        check_action_count(self.preys.len(), actions.len())?;

        self.spawn_bonus();
        self.move_preys(actions);
        self.move_hunters();

        let (mut rewards, terminated) = self.resolve_captures();
        self.collect_bonuses(&mut rewards);

        self.steps += 1;
        let alive = self.alive();
        let total_score = self.total_score;
        let episode_over = !alive.iter().any(|&a| a);

        if episode_over {
            self.reset_episode(Carryover { total_score: self.total_score, fps: self.fps });
        } else {
            self.total_score += self.config.survival_score;
        }

        Ok(StepResult {
            observations: self.render(),
            rewards,
            terminated,
            active_agents: alive,
            score: total_score,
            episode_over,
            info: StepInfo { episode: self.episode, steps: self.steps },
        })
    }

    /// Render one self-centric observation per prey slot.
    ///
    /// Every frame shows hunters, bonuses and live preys; the slot's own prey
    /// is drawn with [`Sprite::PreySelf`] and the rest with
    /// [`Sprite::PreyOther`].
    pub fn render(&mut self) -> Vec<Frame> {
        self.renderer.clear();
        for hunter in &self.hunters {
            self.renderer.draw(Sprite::Hunter, hunter.position.x, hunter.position.y);
        }
        for bonus in &self.bonuses {
            self.renderer.draw(Sprite::Bonus, bonus.position.x, bonus.position.y);
        }

        let mut frames = Vec::with_capacity(self.preys.len());
        for i in 0..self.preys.len() {
            for (j, prey) in self.preys.iter().enumerate() {
                if !prey.alive {
                    continue;
                }
                let sprite = if i == j { Sprite::PreySelf } else { Sprite::PreyOther };
                self.renderer.draw(sprite, prey.position.x, prey.position.y);
            }
            frames.push(self.renderer.read_pixels());
        }
        frames
    }

    fn populate(&mut self, num_hunters: usize, num_preys: usize) {
        let (lo, hi) = self.config.pursuit_steps;

        self.preys = (0..num_preys)
            .map(|_| Prey::new(self.random_position(self.geometry.prey)))
            .collect();
        self.hunters = (0..num_hunters)
            .map(|_| {
                let position = self.random_position(self.geometry.hunter);
                let target = self.rng.gen_range(0..num_preys);
                let counter = self.rng.gen_range(lo..=hi);
                Hunter::new(position, target, counter)
            })
            .collect();
        self.bonuses.clear();
    }

    fn random_position(&mut self, size: Size) -> Position {
        Position::new(
            self.rng.gen_range(0..=self.config.screen_width - size.width),
            self.rng.gen_range(0..=self.config.screen_height - size.height),
        )
    }

    fn spawn_bonus(&mut self) {
        if self.bonuses.len() < self.config.max_bonuses
            && self.rng.gen::<f64>() < self.config.bonus_spawn_prob
        {
            let position = self.random_position(self.geometry.bonus);
            self.bonuses.push(Bonus::new(position));
        }
    }

    fn move_preys(&mut self, actions: &[Move]) {
        let max_x = self.config.screen_width - self.geometry.prey.width;
        let max_y = self.config.screen_height - self.geometry.prey.height;
        for (prey, &action) in self.preys.iter_mut().zip(actions) {
            if prey.alive {
                prey.position = prey.position.step(action, self.config.prey_speed, max_x, max_y);
            }
        }
    }

    fn move_hunters(&mut self) {
        let max_x = self.config.screen_width - self.geometry.hunter.width;
        let max_y = self.config.screen_height - self.geometry.hunter.height;
        for hunter in &mut self.hunters {
            let mv = hunter.choose_move(&self.preys, &self.config, &mut self.rng);
            hunter.position = hunter.position.step(mv, self.config.hunter_speed, max_x, max_y);
        }
    }

    /// Mark captured preys dead; returns per-slot rewards and terminal flags
    fn resolve_captures(&mut self) -> (Vec<f32>, Vec<bool>) {
        let mut rewards = vec![0.0; self.preys.len()];
        let mut terminated = vec![false; self.preys.len()];
        let (hunter_h, prey_h) = (self.geometry.hunter.height, self.geometry.prey.height);

        for (i, prey) in self.preys.iter_mut().enumerate() {
            if !prey.alive {
                continue;
            }
            if self.hunters.iter().any(|h| h.captures(prey, hunter_h, prey_h)) {
                tracing::trace!(prey = i, "prey captured");
                prey.alive = false;
                rewards[i] = self.config.penalty;
                terminated[i] = true;
            } else {
                rewards[i] = self.config.reward;
            }
        }
        (rewards, terminated)
    }

    fn collect_bonuses(&mut self, rewards: &mut [f32]) {
        let (bonus_size, prey_h) = (self.geometry.bonus.height, self.geometry.prey.height);

        for (i, prey) in self.preys.iter().enumerate() {
            if !prey.alive {
                continue;
            }
            let before = self.bonuses.len();
            self.bonuses.retain(|b| !b.reached_by(prey, bonus_size, prey_h));
            let picked = (before - self.bonuses.len()) as f32;
            if picked > 0.0 {
                tracing::trace!(prey = i, picked, "bonus collected");
                rewards[i] += self.config.bonus * picked;
                self.total_score += self.config.bonus * picked;
            }
        }
    }
}

impl<R: RenderTarget> Environment for HunterPrey<R> {
    type Action = Move;
    type Score = f32;

    fn num_agents(&self) -> usize {
        self.preys.len()
    }

    fn reset(&mut self) -> Result<Vec<Frame>> {
        self.reset_episode(Carryover { total_score: 0.0, fps: self.fps });
        self.episode = 0;
        Ok(self.render())
    }

    fn step(&mut self, actions: &[Move]) -> Result<StepResult<f32>> {
        self.step(actions)
    }

    fn observation_space(&self) -> SpaceInfo {
        SpaceInfo {
            shape: vec![self.renderer.height(), self.renderer.width(), Frame::CHANNELS],
            dtype: SpaceType::Pixels,
        }
    }

    fn action_space(&self) -> SpaceInfo {
        SpaceInfo { shape: vec![], dtype: SpaceType::Discrete(Move::COUNT) }
    }
}
