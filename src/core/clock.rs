use std::time::Instant;

/// Frame clock - elapsed time since launch plus per-frame delta
///
/// Elapsed time is kept in `f64` so long sessions keep sub-millisecond
/// resolution for the animation curves.
#[derive(Debug)]
pub struct Clock {
    epoch: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            epoch: now,
            last_tick: now,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns (elapsed since epoch, delta) in seconds
    pub fn tick(&mut self) -> (f64, f32) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        (now.duration_since(self.epoch).as_secs_f64(), delta)
    }

    /// Seconds since the clock was created, never reset
    pub fn elapsed(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let (_, delta) = clock.tick();

        assert!(delta >= 0.009);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = Clock::new();

        let (first, _) = clock.tick();
        thread::sleep(Duration::from_millis(5));
        let (second, _) = clock.tick();

        assert!(second > first);
        assert!(clock.elapsed() >= second);
    }
}
