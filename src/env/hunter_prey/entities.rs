//! Hunter, prey and bonus entities
//!
//! Hunters are driven by a pursuit heuristic: they lock onto the nearest
//! live prey for a handful of frames, chase it greedily one axis at a time,
//! and wander randomly when it is out of sight.

use rand::Rng;

use super::{
    config::HunterPreyConfig,
    types::{Move, Position},
};

/// A computer-controlled hunter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunter {
    /// Top-left position
    pub position: Position,
    /// Index of the prey currently being tracked
    pub target: usize,
    /// Frames left before the target is re-evaluated
    pub pursuit_counter: i32,
}

/// An externally controlled prey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prey {
    /// Top-left position
    pub position: Position,
    /// Whether the prey is still in play this episode
    pub alive: bool,
}

/// A transient pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bonus {
    /// Top-left position
    pub position: Position,
}

impl Prey {
    /// Create a live prey at position
    pub fn new(position: Position) -> Self {
        Self { position, alive: true }
    }
}

impl Hunter {
    /// Create a hunter tracking `target`
    pub fn new(position: Position, target: usize, pursuit_counter: i32) -> Self {
        Self { position, target, pursuit_counter }
    }

    /// Decide this frame's move.
    ///
    /// Updates the tracked target and pursuit counter as a side effect.
    /// Returns `NoMove` only if the pursuit logic picks it or no prey is
    /// alive.
    pub fn choose_move(
        &mut self,
        preys: &[Prey],
        config: &HunterPreyConfig,
        rng: &mut impl Rng,
    ) -> Move {
        if rng.gen::<f64>() < config.random_move_prob {
            return random_move(rng);
        }

        let keep_target = self.pursuit_counter > 0
            && preys.get(self.target).is_some_and(|p| p.alive)
            && rng.gen::<f64>() < config.pursuit_keep_prob;

        if keep_target {
            self.pursuit_counter -= 1;
        } else {
            let Some(nearest) = nearest_live_prey(self.position, preys) else {
                return Move::NoMove;
            };
            if nearest != self.target {
                tracing::debug!(from = self.target, to = nearest, "hunter retargeted");
            }
            self.target = nearest;
            let (lo, hi) = config.pursuit_steps;
            self.pursuit_counter = rng.gen_range(lo..=hi);
        }

        let target = preys[self.target].position;
        let radius = config.detection_radius as i64;
        if self.position.distance_squared(&target) > radius * radius && self.pursuit_counter >= 0 {
            random_move(rng)
        } else {
            greedy_move(self.position, target)
        }
    }

    /// Whether this hunter's hitbox overlaps the prey's.
    ///
    /// Both are treated as circles of half their sprite height; touching
    /// exactly does not count.
    pub fn captures(&self, prey: &Prey, hunter_height: i32, prey_height: i32) -> bool {
        let reach = (hunter_height + prey_height) as f64 / 2.0;
        self.position.distance(&prey.position) < reach
    }
}

impl Bonus {
    /// Create a bonus at position
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Whether a prey at `prey` is close enough to pick this bonus up
    pub fn reached_by(&self, prey: &Prey, bonus_size: i32, prey_height: i32) -> bool {
        let reach = (bonus_size + prey_height) as f64 / 2.0;
        self.position.distance(&prey.position) <= reach
    }
}

/// Index of the live prey closest to `from` by Manhattan distance.
///
/// Ties go to the lowest index. `None` when every prey is dead.
pub fn nearest_live_prey(from: Position, preys: &[Prey]) -> Option<usize> {
    preys
        .iter()
        .enumerate()
        .filter(|(_, p)| p.alive)
        .min_by_key(|(_, p)| from.manhattan_distance(&p.position))
        .map(|(i, _)| i)
}

/// Single-axis greedy step from `from` toward `to`.
///
/// Moves along x when the horizontal gap is strictly larger, otherwise
/// along y.
pub fn greedy_move(from: Position, to: Position) -> Move {
    let x_distance = (to.x - from.x).abs();
    let y_distance = (to.y - from.y).abs();
    let move_left = to.x < from.x;
    let move_up = to.y < from.y;

    match (x_distance > y_distance, move_left, move_up) {
        (true, true, _) => Move::Left,
        (true, false, _) => Move::Right,
        (false, _, true) => Move::Up,
        (false, _, false) => Move::Down,
    }
}

/// Uniform draw over all five moves, including `NoMove`
pub fn random_move(rng: &mut impl Rng) -> Move {
    Move::ALL[rng.gen_range(0..Move::COUNT)]
}
