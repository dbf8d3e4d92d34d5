//! Basic types for the Hunter-Prey environment
//!
//! This module defines moves, positions and the distance helpers shared by
//! hunters, preys and bonuses.

use crate::EnvError;

/// Discrete move for a hunter or prey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Up,
    Right,
    Down,
    NoMove,
}

impl Move {
    /// All moves in action-index order
    pub const ALL: [Move; 5] = [Move::Left, Move::Up, Move::Right, Move::Down, Move::NoMove];

    /// Number of distinct moves
    pub const COUNT: usize = 5;

    /// Action index of this move
    pub fn index(self) -> i64 {
        match self {
            Move::Left => 0,
            Move::Up => 1,
            Move::Right => 2,
            Move::Down => 3,
            Move::NoMove => 4,
        }
    }

    /// Unit (dx, dy) step, screen coordinates (y grows downward)
    pub fn to_delta(self) -> (i32, i32) {
        match self {
            Move::Left => (-1, 0),
            Move::Up => (0, -1),
            Move::Right => (1, 0),
            Move::Down => (0, 1),
            Move::NoMove => (0, 0),
        }
    }
}

impl TryFrom<i64> for Move {
    type Error = EnvError;

    fn try_from(action: i64) -> Result<Self, Self::Error> {
        match action {
            0 => Ok(Move::Left),
            1 => Ok(Move::Up),
            2 => Ok(Move::Right),
            3 => Ok(Move::Down),
            4 => Ok(Move::NoMove),
            other => Err(EnvError::invalid_argument(format!(
                "move index must be in 0..=4, got {}",
                other
            ))),
        }
    }
}

/// Top-left pixel position of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move `speed` pixels in `direction`, then clamp into
    /// `[0, max_x] x [0, max_y]`
    pub fn step(self, direction: Move, speed: i32, max_x: i32, max_y: i32) -> Self {
        let (dx, dy) = direction.to_delta();
        Self::new(
            (self.x + dx * speed).clamp(0, max_x),
            (self.y + dy * speed).clamp(0, max_y),
        )
    }

    /// Manhattan distance to another position
    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Squared Euclidean distance to another position
    pub fn distance_squared(&self, other: &Position) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &Position) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_index_roundtrip() {
        for mv in Move::ALL {
            assert_eq!(Move::try_from(mv.index()).unwrap(), mv);
        }
        assert!(Move::try_from(5).is_err());
        assert!(Move::try_from(-1).is_err());
    }

    #[test]
    fn test_step_clamps_to_bounds() {
        let pos = Position::new(3, 157);

        assert_eq!(pos.step(Move::Left, 10, 160, 160), Position::new(0, 157));
        assert_eq!(pos.step(Move::Down, 10, 160, 160), Position::new(3, 160));
        assert_eq!(pos.step(Move::Right, 10, 160, 160), Position::new(13, 157));
        assert_eq!(pos.step(Move::NoMove, 10, 160, 160), pos);
    }

    #[test]
    fn test_distances() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);

        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(a.distance_squared(&b), 25);
        assert_eq!(a.distance(&b), 5.0);
    }
}
