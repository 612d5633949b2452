//! Pilot-flame dwell controller.
//!
//! Tracks how long the process temperature has dwelt inside its hysteresis
//! band. After `wait` ticks in-band the heat-maintenance output activates
//! for up to `active` ticks, then the counter wraps and the cycle repeats
//! for as long as the process stays in-band. Leaving the band at any point
//! zeroes the counter and drops the output immediately.

/// Dwell counter for the pilot-flame cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PilotDwell {
    counter: u32,
}

impl PilotDwell {
    /// Current dwell counter value.
    #[inline]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Zero the dwell counter.
    #[inline]
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Advance one tick and return whether the pilot output is active.
    ///
    /// The output is active while the counter sits in the window
    /// `[wait_ticks, wait_ticks + active_ticks)`. A zero active window
    /// never activates.
    pub fn step(&mut self, in_band: bool, wait_ticks: u32, active_ticks: u32) -> bool {
        if !in_band {
            self.counter = 0;
            return false;
        }
        let total = wait_ticks.saturating_add(active_ticks);
        let active = active_ticks > 0 && self.counter >= wait_ticks;
        self.counter += 1;
        if total == 0 || self.counter >= total {
            self.counter = 0;
        }
        active
    }
}
