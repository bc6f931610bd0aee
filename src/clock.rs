use std::thread;
use std::time::{Duration, Instant};

/// Frame pacing: blocks until the next tick boundary.
pub trait Clock {
    /// Sleeps until at least `1 / rate` seconds have passed since the previous
    /// call and returns the time actually elapsed between the two calls.
    fn tick(&mut self, rate: u32) -> Duration;
}

/// Wall-clock implementation that sleeps the calling thread.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn tick_budget(rate: u32) -> Duration {
    Duration::from_secs(1) / rate.max(1)
}

impl Clock for FrameClock {
    fn tick(&mut self, rate: u32) -> Duration {
        let Some(last_tick) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return Duration::ZERO;
        };

        let budget = tick_budget(rate);
        let elapsed = last_tick.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now - last_tick
    }
}
