use std::time::Instant;

/// Frame clock: per-frame delta time from a monotonic source, with a
/// smoothed FPS readout for the title bar.
pub struct FrameClock {
    /// Last tick timestamp.
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a frame clock. The first [`tick`](Self::tick) measures from
    /// here, so it returns a near-zero interval with no motion effect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Measure the wall-clock time since the previous tick and return it in
    /// seconds.
    ///
    /// When the interval is positive the instantaneous `1/dt` is folded
    /// into the smoothed FPS; a zero interval (zero-resolution timer, or
    /// time not advancing between polls) leaves the previous value in
    /// place, guarding the division.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        if delta_time > 0.0 {
            let instant_fps = 1.0 / delta_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        delta_time
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_returns_nonnegative_deltas() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            assert!(clock.tick() >= 0.0);
        }
    }

    #[test]
    fn fps_stays_positive_and_finite() {
        let mut clock = FrameClock::new();
        let _ = clock.tick();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let _ = clock.tick();
        assert!(clock.fps() > 0.0);
        assert!(clock.fps().is_finite());
    }

    #[test]
    fn measured_delta_tracks_wall_clock() {
        let mut clock = FrameClock::new();
        let _ = clock.tick();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let delta_time = clock.tick();
        assert!(delta_time >= 0.02);
    }
}
