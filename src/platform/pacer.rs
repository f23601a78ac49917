//! Fixed-rate frame pacing for the outer loop

use std::time::{Duration, Instant};

/// Longest step handed to the game after a stall (suspend, slow terminal)
const MAX_FRAME_DT: f32 = 0.1;

/// Sleeps until the next frame deadline and reports elapsed time
#[derive(Debug)]
pub struct FramePacer {
    period: Duration,
    deadline: Instant,
    last: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        let period = Duration::from_secs(1) / fps.max(1);
        let now = Instant::now();
        Self {
            period,
            deadline: now + period,
            last: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left before the current frame deadline
    pub fn time_left(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Sleep until the deadline, schedule the next one, and return the
    /// seconds since the previous call (capped at 0.1 s).
    pub fn wait(&mut self) -> f32 {
        let left = self.time_left();
        if !left.is_zero() {
            std::thread::sleep(left);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32().min(MAX_FRAME_DT);
        self.last = now;

        self.deadline += self.period;
        // Fell behind by more than a frame: resync instead of bursting
        if self.deadline < now {
            self.deadline = now + self.period;
        }
        dt
    }
}
