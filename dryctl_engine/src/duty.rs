//! Cyclic duty controller.
//!
//! Generates ON/OFF pulses from configured durations while a governing
//! condition holds. The output is evaluated from the counter value before
//! the per-tick increment, so the first governed tick sees counter 0 and
//! a fresh ON window. The counter resets the instant the condition is
//! false — there is no cycle memory across idle periods.

/// Per-actuator duty cycle state: a single tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DutyCycle {
    counter: u32,
}

impl DutyCycle {
    /// Current counter value.
    #[inline]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Zero the counter.
    #[inline]
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Advance one tick and return the actuator command.
    ///
    /// `governed == false` resets the counter and forces the output off.
    /// A zero total period also forces the output off.
    pub fn step(&mut self, governed: bool, on_ticks: u32, off_ticks: u32) -> bool {
        if !governed {
            self.counter = 0;
            return false;
        }
        let period = on_ticks.saturating_add(off_ticks);
        if period == 0 {
            self.counter = 0;
            return false;
        }
        let active = self.counter % period < on_ticks;
        // Wrap at the period boundary so the counter stays bounded.
        self.counter = if self.counter + 1 >= period {
            0
        } else {
            self.counter + 1
        };
        active
    }
}
