//! Fire-cutoff valve travel watchdog.
//!
//! The valve is a motorized actuator with end-of-travel limit switches;
//! travel takes real time and the engine only observes it. The watchdog
//! counts the ticks during which the commanded position disagrees with the
//! corresponding limit switch and asserts a travel fault once the count
//! reaches the configured timeout. Reaching the commanded limit, or a
//! command reversal, restarts the count. Both limit switches asserted at
//! once is a sensor conflict and faults immediately.

use dryctl_common::state::FaultFlags;

/// Valve travel watchdog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValveWatch {
    commanded_open: bool,
    travel_ticks: u32,
}

impl Default for ValveWatch {
    fn default() -> Self {
        // The valve rests closed and de-energized.
        Self {
            commanded_open: false,
            travel_ticks: 0,
        }
    }
}

impl ValveWatch {
    /// Ticks spent in travel toward the commanded limit.
    #[inline]
    pub const fn travel_ticks(&self) -> u32 {
        self.travel_ticks
    }

    /// Zero the travel counter and resume from the closed command.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one tick and return the valve fault flags for this tick.
    ///
    /// `timeout_ticks == 0` disables the travel watchdog (the sensor
    /// conflict check stays active).
    pub fn step(
        &mut self,
        commanded_open: bool,
        open_limit: bool,
        closed_limit: bool,
        timeout_ticks: u32,
    ) -> FaultFlags {
        let mut faults = FaultFlags::empty();

        if open_limit && closed_limit {
            faults |= FaultFlags::VALVE_SENSOR;
        }

        if commanded_open != self.commanded_open {
            // Command reversed: a new travel begins.
            self.commanded_open = commanded_open;
            self.travel_ticks = 0;
        }

        let at_limit = if commanded_open {
            open_limit
        } else {
            closed_limit
        };

        if at_limit {
            self.travel_ticks = 0;
        } else {
            self.travel_ticks = self.travel_ticks.saturating_add(1);
            if timeout_ticks > 0 && self.travel_ticks >= timeout_ticks {
                faults |= FaultFlags::VALVE_TRAVEL;
            }
        }

        faults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fault_while_at_commanded_limit() {
        let mut watch = ValveWatch::default();
        for _ in 0..100 {
            assert!(watch.step(false, false, true, 10).is_empty());
        }
        assert_eq!(watch.travel_ticks(), 0);
    }

    #[test]
    fn travel_fault_after_timeout() {
        let mut watch = ValveWatch::default();
        // Commanded open, never reaches the open limit.
        for tick in 1..10 {
            let faults = watch.step(true, false, false, 10);
            assert!(faults.is_empty(), "tick {tick} should still be in travel");
        }
        let faults = watch.step(true, false, false, 10);
        assert!(faults.contains(FaultFlags::VALVE_TRAVEL));
        // Fault stays asserted while the disagreement persists.
        let faults = watch.step(true, false, false, 10);
        assert!(faults.contains(FaultFlags::VALVE_TRAVEL));
    }

    #[test]
    fn reaching_limit_clears_travel_count() {
        let mut watch = ValveWatch::default();
        for _ in 0..5 {
            watch.step(true, false, false, 10);
        }
        assert_eq!(watch.travel_ticks(), 5);

        assert!(watch.step(true, true, false, 10).is_empty());
        assert_eq!(watch.travel_ticks(), 0);
    }

    #[test]
    fn command_reversal_restarts_travel() {
        let mut watch = ValveWatch::default();
        for _ in 0..8 {
            watch.step(true, false, false, 10);
        }
        // Close command while mid-travel: fresh count toward the closed limit.
        assert!(watch.step(false, false, false, 10).is_empty());
        assert_eq!(watch.travel_ticks(), 1);
    }

    #[test]
    fn close_travel_is_watched_too() {
        let mut watch = ValveWatch::default();
        watch.step(true, true, false, 10); // open and confirmed
        for tick in 1..10 {
            let faults = watch.step(false, true, false, 10);
            assert!(faults.is_empty(), "tick {tick}");
        }
        let faults = watch.step(false, true, false, 10);
        assert!(faults.contains(FaultFlags::VALVE_TRAVEL));
    }

    #[test]
    fn both_limits_is_a_sensor_conflict() {
        let mut watch = ValveWatch::default();
        let faults = watch.step(false, true, true, 10);
        assert!(faults.contains(FaultFlags::VALVE_SENSOR));
        assert!(!faults.contains(FaultFlags::VALVE_TRAVEL));
    }

    #[test]
    fn zero_timeout_disables_travel_watchdog() {
        let mut watch = ValveWatch::default();
        for _ in 0..1000 {
            assert!(watch.step(true, false, false, 0).is_empty());
        }
    }
}
