//! Frame timing
//!
//! Elapsed time comes from a monotonic millisecond counter started with the
//! clock. The previous reading starts at zero, so the first delta also
//! covers startup.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    last_ticks: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last_ticks: 0.0,
        }
    }

    /// Milliseconds since the clock was created
    pub fn ticks_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    /// Seconds since the previous call
    pub fn delta(&mut self) -> f32 {
        let ticks = self.ticks_ms();
        self.delta_at(ticks)
    }

    /// Seconds between the previous reading and `ticks_ms`
    pub fn delta_at(&mut self, ticks_ms: u64) -> f32 {
        let ticks = ticks_ms as f32 / 1000.0;
        let dt = ticks - self.last_ticks;
        self.last_ticks = ticks;
        dt
    }
}
