//! Fixed-rate frame pacing for driving loops
//!
//! `step` never sleeps; a loop that wants real-time playback calls
//! [`FrameClock::tick`] once per frame.

use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's time budget
#[derive(Debug, Clone)]
pub struct FrameClock {
    budget: Duration,
    last: Option<Instant>,
}

impl FrameClock {
    /// Clock targeting `fps` frames per second. `0` disables pacing.
    pub fn new(fps: u32) -> Self {
        let budget = if fps == 0 { Duration::ZERO } else { Duration::from_secs(1) / fps };
        Self { budget, last: None }
    }

    /// Time budget per frame
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Change the target rate without losing the last tick
    pub fn set_fps(&mut self, fps: u32) {
        self.budget = Self::new(fps).budget;
    }

    /// Block until one frame budget has elapsed since the previous tick.
    ///
    /// Returns the time actually spent since the previous tick (zero on the
    /// first call).
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let Some(last) = self.last else {
            self.last = Some(now);
            return Duration::ZERO;
        };

        let elapsed = now.duration_since(last);
        if elapsed < self.budget {
            std::thread::sleep(self.budget - elapsed);
        }
        let now = Instant::now();
        self.last = Some(now);
        now.duration_since(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_from_fps() {
        assert_eq!(FrameClock::new(20).budget(), Duration::from_millis(50));
        assert_eq!(FrameClock::new(0).budget(), Duration::ZERO);
    }

    #[test]
    fn test_tick_waits_for_budget() {
        let mut clock = FrameClock::new(100);
        assert_eq!(clock.tick(), Duration::ZERO);

        let spent = clock.tick();
        assert!(spent >= Duration::from_millis(10), "tick returned after {:?}", spent);
    }
}
