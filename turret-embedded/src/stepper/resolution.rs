/// Microsteps per output shaft revolution of the stock drivers.
pub const DEFAULT_STEPS_PER_REVOLUTION: u32 = 16_000;

/// Angular resolution of a stepper: how many pulses make one revolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResolution {
    steps_per_revolution: u32,
}

impl StepResolution {
    pub const fn new(steps_per_revolution: u32) -> Self {
        Self { steps_per_revolution }
    }

    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    pub fn steps_per_degree(&self) -> f64 {
        self.steps_per_revolution as f64 / 360.0
    }

    /// Number of pulses needed to turn by `degrees`, ignoring the sign.
    ///
    /// Fractional steps are truncated toward zero, so angles below one step
    /// (1/44.4° at 16000 steps/rev) produce no motion at all. Counts beyond
    /// `u64::MAX` saturate, which at any real pulse rate outlasts the hardware.
    pub fn steps_for(&self, degrees: f64) -> u64 {
        libm::fabs(degrees * self.steps_per_degree()) as u64
    }
}

impl Default for StepResolution {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS_PER_REVOLUTION)
    }
}
