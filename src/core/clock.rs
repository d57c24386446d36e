use std::time::Instant;

/// A stalled frame (breakpoint, window drag, laptop sleep) would otherwise
/// produce one giant movement step and teleport the camera.
const MAX_DELTA: f32 = 0.25;

/// Frame clock feeding delta time to camera movement
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the last tick, capped at `MAX_DELTA`, and advance
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_DELTA)
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
