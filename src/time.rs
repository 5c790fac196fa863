//! Simulation clock for the planetarium.
//!
//! Two timelines advance from the same frame delta: wall time, which drives
//! focus animations, glow expiry and the sun's pulse, and orbital time, which
//! parameterizes body positions and stands still while paused.

/// Monotonic clock with a pause flag that only freezes body motion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationClock {
    /// Seconds since the view was mounted, including paused stretches.
    elapsed: f64,
    /// Seconds of unpaused time; the orbit parameter `t`.
    orbital: f64,
    /// Whether body motion is frozen.
    paused: bool,
}

impl SimulationClock {
    /// Create a clock starting at a specific orbital time.
    pub fn at_orbital_time(seconds: f64) -> Self {
        Self {
            elapsed: 0.0,
            orbital: seconds,
            paused: false,
        }
    }

    /// Advance by one frame delta. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
        if !self.paused {
            self.orbital += dt;
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn orbital_time(&self) -> f64 {
        self.orbital
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}
