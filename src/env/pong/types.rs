//! Basic types for the Pong environment

use crate::EnvError;

/// Discrete paddle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleMove {
    NoMove,
    Up,
    Down,
}

impl PaddleMove {
    /// All commands in action-index order
    pub const ALL: [PaddleMove; 3] = [PaddleMove::NoMove, PaddleMove::Up, PaddleMove::Down];

    /// Number of distinct commands
    pub const COUNT: usize = 3;

    /// Action index of this command
    pub fn index(self) -> i64 {
        match self {
            PaddleMove::NoMove => 0,
            PaddleMove::Up => 1,
            PaddleMove::Down => 2,
        }
    }

    /// Paddle velocity for this command at `speed` (y grows downward)
    pub fn velocity(self, speed: f32) -> f32 {
        match self {
            PaddleMove::NoMove => 0.0,
            PaddleMove::Up => -speed,
            PaddleMove::Down => speed,
        }
    }
}

impl TryFrom<i64> for PaddleMove {
    type Error = EnvError;

    fn try_from(action: i64) -> Result<Self, Self::Error> {
        match action {
            0 => Ok(PaddleMove::NoMove),
            1 => Ok(PaddleMove::Up),
            2 => Ok(PaddleMove::Down),
            other => Err(EnvError::invalid_argument(format!(
                "paddle action index must be in 0..=2, got {}",
                other
            ))),
        }
    }
}

/// Which end of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_move_indices() {
        for mv in PaddleMove::ALL {
            assert_eq!(PaddleMove::try_from(mv.index()).unwrap(), mv);
        }
        assert!(PaddleMove::try_from(3).is_err());
        assert!(PaddleMove::try_from(-1).is_err());
    }

    #[test]
    fn test_paddle_move_velocity() {
        assert_eq!(PaddleMove::Up.velocity(17.0), -17.0);
        assert_eq!(PaddleMove::Down.velocity(17.0), 17.0);
        assert_eq!(PaddleMove::NoMove.velocity(17.0), 0.0);
    }
}
