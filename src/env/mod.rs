//! Environment traits and implementations
//!
//! This module defines the multi-agent environment interface shared by the
//! built-in games. Each game advances one frame per `step`, renders one
//! pixel observation per agent, and resets itself when an episode ends.

use anyhow::Result;

use crate::render::Frame;

/// Core trait for frame-stepped, multi-agent pixel environments
pub trait Environment {
    /// Per-agent action type, a closed enumeration
    type Action: Copy + TryFrom<i64, Error = crate::EnvError>;

    /// Score reported alongside each step
    type Score: Copy;

    /// Number of agents whose actions `step` expects
    fn num_agents(&self) -> usize;

    /// Start a new run: fresh world, scores cleared.
    ///
    /// Returns one initial observation per observing agent.
    fn reset(&mut self) -> Result<Vec<Frame>>;

    /// Advance the world by one frame
    fn step(&mut self, actions: &[Self::Action]) -> Result<StepResult<Self::Score>>;

    /// Advance the world from raw action indices.
    ///
    /// Every index is validated before the world is touched; a bad index
    /// fails with [`crate::EnvError::InvalidArgument`].
    fn step_indices(&mut self, actions: &[i64]) -> Result<StepResult<Self::Score>> {
        let actions = actions
            .iter()
            .map(|&a| <Self::Action as TryFrom<i64>>::try_from(a))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.step(&actions)
    }

    /// Get the observation space dimensions
    fn observation_space(&self) -> SpaceInfo;

    /// Get the action space dimensions
    fn action_space(&self) -> SpaceInfo;
}

/// Result of an environment step
#[derive(Debug, Clone)]
pub struct StepResult<S> {
    /// One rendered frame per observing agent
    pub observations: Vec<Frame>,

    /// Reward per agent for this frame
    pub rewards: Vec<f32>,

    /// Per-agent terminal flags
    pub terminated: Vec<bool>,

    /// Which agents are still in play at the end of the frame
    pub active_agents: Vec<bool>,

    /// Accumulated score
    pub score: S,

    /// Whether this frame ended the episode (the world has already been
    /// reinitialized when this is set)
    pub episode_over: bool,

    /// Additional info
    pub info: StepInfo,
}

/// Space information for observations and actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceInfo {
    /// Shape of the space
    pub shape: Vec<usize>,

    /// Data type
    pub dtype: SpaceType,
}

/// Space data types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceType {
    /// Discrete space with n options
    Discrete(usize),

    /// RGB bytes
    Pixels,
}

/// Additional step information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// Episodes completed so far in this run
    pub episode: usize,

    /// Frames elapsed in the current episode
    pub steps: usize,
}

pub mod hunter_prey;
pub mod pong;

/// Check a batch length before any state is touched
pub(crate) fn check_action_count(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(crate::EnvError::invalid_argument(format!(
            "expected {} actions, got {}",
            expected, got
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnvError;

    #[test]
    fn test_check_action_count() {
        assert!(check_action_count(2, 2).is_ok());

        let err = check_action_count(2, 1).unwrap_err();
        assert!(matches!(err.downcast_ref::<EnvError>(), Some(EnvError::InvalidArgument(_))));
    }
}
