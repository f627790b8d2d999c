//! Loop pacing

use std::time::{Duration, Instant};

use super::Clock;

/// Caps the loop at a fixed rate by sleeping away the rest of each frame
#[derive(Debug, Default)]
pub struct FixedRateClock {
    last: Option<Instant>,
}

impl FixedRateClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for FixedRateClock {
    fn tick(&mut self, interval: Duration) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
        // Don't let the pause count toward the next frame
        self.last = Some(Instant::now());
    }
}

/// Clock that never blocks; records what it was asked to do
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    /// Number of `tick` calls
    pub ticks: u64,
    /// Simulated time spent in `tick` and `sleep`
    pub elapsed: Duration,
    /// Every `sleep` request, in order
    pub sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn tick(&mut self, interval: Duration) {
        self.ticks += 1;
        self.elapsed += interval;
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.elapsed += duration;
    }
}
