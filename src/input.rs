//! Per-frame action sources
//!
//! A driving loop asks an [`ActionSource`] for one action index per agent
//! each frame and hands the batch to `Environment::step_indices`. Keyboard
//! capture lives in front-ends; the sources here cover random play and
//! scripted replays.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Anything that can produce a batch of raw action indices
pub trait ActionSource {
    /// Actions for the next frame, one per agent
    fn next_actions(&mut self, num_agents: usize) -> Vec<i64>;
}

/// Uniformly random actions over `0..num_actions`
#[derive(Debug, Clone)]
pub struct RandomActions {
    num_actions: i64,
    rng: StdRng,
}

impl RandomActions {
    /// Random source seeded from entropy
    pub fn new(num_actions: usize) -> Self {
        Self { num_actions: num_actions as i64, rng: StdRng::from_entropy() }
    }

    /// Deterministic random source
    pub fn with_seed(num_actions: usize, seed: u64) -> Self {
        Self { num_actions: num_actions as i64, rng: StdRng::seed_from_u64(seed) }
    }
}

impl ActionSource for RandomActions {
    fn next_actions(&mut self, num_agents: usize) -> Vec<i64> {
        (0..num_agents).map(|_| self.rng.gen_range(0..self.num_actions)).collect()
    }
}

/// Replays a fixed list of action batches, then repeats a fallback action
#[derive(Debug, Clone)]
pub struct ScriptedActions {
    script: Vec<Vec<i64>>,
    cursor: usize,
    fallback: i64,
}

impl ScriptedActions {
    pub fn new(script: Vec<Vec<i64>>, fallback: i64) -> Self {
        Self { script, cursor: 0, fallback }
    }

    /// Hold the same per-agent batch for `frames` frames
    pub fn repeat(batch: Vec<i64>, frames: usize, fallback: i64) -> Self {
        Self::new(vec![batch; frames], fallback)
    }

    /// Whether every scripted batch has been handed out
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.script.len()
    }
}

impl ActionSource for ScriptedActions {
    fn next_actions(&mut self, num_agents: usize) -> Vec<i64> {
        match self.script.get(self.cursor) {
            Some(batch) => {
                self.cursor += 1;
                batch.clone()
            }
            None => vec![self.fallback; num_agents],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_actions_in_range() {
        let mut source = RandomActions::with_seed(5, 11);
        for _ in 0..100 {
            let batch = source.next_actions(3);
            assert_eq!(batch.len(), 3);
            assert!(batch.iter().all(|a| (0..5).contains(a)));
        }
    }

    #[test]
    fn test_scripted_actions_then_fallback() {
        let mut source = ScriptedActions::new(vec![vec![1, 2], vec![0, 0]], 4);

        assert_eq!(source.next_actions(2), vec![1, 2]);
        assert_eq!(source.next_actions(2), vec![0, 0]);
        assert!(source.is_exhausted());
        assert_eq!(source.next_actions(2), vec![4, 4]);
    }
}
