/// Lowest simulation rate. Zero freezes the simulation.
pub const MIN_SIMULATION_RATE: u32 = 0;
/// Highest simulation rate (steps per second).
pub const MAX_SIMULATION_RATE: u32 = 60;

/// Display-tick throttle.
/// Decides, once per display refresh, whether a simulation step should run,
/// so the simulation advances at `rate` steps per second regardless of the
/// host's refresh rate.
#[derive(Debug, Clone, PartialEq)]
pub struct RateThrottle {
    /// Simulation steps per second, clamped to `[MIN_SIMULATION_RATE, MAX_SIMULATION_RATE]`.
    rate: u32,
    /// Display ticks counted since the last simulation step.
    accumulator: u32,
}

impl RateThrottle {
    /// Create a throttle. Out-of-range rates are clamped, never rejected.
    pub fn new(rate: i32) -> Self {
        Self {
            rate: clamp_rate(rate),
            accumulator: 0,
        }
    }

    /// Count one display tick. Returns true if a simulation step is due.
    pub fn tick(&mut self, display_rate: u32) -> bool {
        self.accumulator = self.accumulator.saturating_add(1);
        let Some(ratio) = self.ratio(display_rate) else {
            return false;
        };
        if f64::from(self.accumulator) < ratio {
            return false;
        }
        self.accumulator = 0;
        true
    }

    /// Display ticks per simulation step, or `None` while frozen.
    pub fn ratio(&self, display_rate: u32) -> Option<f64> {
        if self.rate == 0 {
            return None;
        }
        Some(f64::from(display_rate) / f64::from(self.rate))
    }

    /// Shift the rate by `delta`, clamping. Returns the new rate.
    pub fn adjust(&mut self, delta: i32) -> u32 {
        let requested = i64::from(self.rate) + i64::from(delta);
        self.rate = clamp_rate(requested.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
        self.rate
    }

    /// Replace the rate, clamping.
    pub fn set_rate(&mut self, rate: i32) {
        self.rate = clamp_rate(rate);
    }

    /// Current simulation rate.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn is_frozen(&self) -> bool {
        self.rate == 0
    }
}

fn clamp_rate(rate: i32) -> u32 {
    rate.clamp(MIN_SIMULATION_RATE as i32, MAX_SIMULATION_RATE as i32) as u32
}
