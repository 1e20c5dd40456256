//! Simulation clock with pause accounting.
//!
//! Orbital motion runs on "effective time": the raw wall-clock timestamp
//! minus the total time spent paused. Resuming therefore never causes a
//! forward jump in planet positions.

/// Two-state clock (running/paused) driven by raw millisecond timestamps.
///
/// Invariant: while running, `effective_time` is monotonically
/// non-decreasing across frames; while paused it is frozen at the value
/// computed the instant pause began.
pub struct SimulationClock {
    paused: bool,
    pause_start_ms: f64,
    paused_total_ms: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            paused: false,
            pause_start_ms: 0.0,
            paused_total_ms: 0.0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flips the pause state at raw timestamp `now_ms`.
    ///
    /// Entering pause records the pause start; leaving it folds the paused
    /// interval into the running total.
    pub fn toggle(&mut self, now_ms: f64) {
        if self.paused {
            self.paused_total_ms += now_ms - self.pause_start_ms;
        } else {
            self.pause_start_ms = now_ms;
        }
        self.paused = !self.paused;
    }

    /// Maps a raw timestamp to simulation time.
    pub fn effective_time(&self, raw_ms: f64) -> f64 {
        if self.paused {
            self.pause_start_ms - self.paused_total_ms
        } else {
            raw_ms - self.paused_total_ms
        }
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
