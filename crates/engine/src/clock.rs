//! Frame timing.

use std::time::{Duration, Instant};

/// Monotonic wall clock measured from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame timing snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick (or since the clock was started).
    pub dt: f32,

    /// Zero-based frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Frames per second implied by `dt`; zero when no time has passed.
    pub fn fps(&self) -> f32 {
        if self.dt > 0.0 {
            1.0 / self.dt
        } else {
            0.0
        }
    }
}

/// Turns a stream of monotonic timestamps into per-frame delta times.
///
/// Delta time is reported exactly as measured; there is no clamping.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Duration,
    frame_index: u64,
}

impl FrameClock {
    /// Start measuring from `now`.
    pub fn new(now: Duration) -> Self {
        Self {
            last: now,
            frame_index: 0,
        }
    }

    /// Move the baseline to `now` without producing a frame.
    pub fn reset(&mut self, now: Duration) {
        self.last = now;
    }

    pub fn tick(&mut self, now: Duration) -> FrameTime {
        let dt = now.saturating_sub(self.last);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}
