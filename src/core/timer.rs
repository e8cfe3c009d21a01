//! Delta-driven timers. Each one is fed frame deltas in seconds and owns
//! the decision of when to fire; nothing here reads the wall clock.

/// Fires at most once per `min_interval`, the first time after a full interval
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: 0.0,
        }
    }

    /// Accumulate `delta`; true when the interval has been reached
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }
}

/// Frames-per-second meter fed with frame deltas
#[derive(Debug, Clone, Copy)]
pub struct FpsMeter {
    window: Throttled,
    frames: u32,
    accumulated: f32,
}

impl FpsMeter {
    pub fn new(interval: f32) -> Self {
        Self {
            window: Throttled::new(interval),
            frames: 0,
            accumulated: 0.0,
        }
    }

    /// Record one frame, returns the average rate when the window closes
    pub fn frame(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulated += delta;

        if !self.window.try_tick(delta) {
            return None;
        }

        let fps = self.frames as f32 / self.accumulated.max(f32::EPSILON);
        self.frames = 0;
        self.accumulated = 0.0;
        Some(fps)
    }
}
