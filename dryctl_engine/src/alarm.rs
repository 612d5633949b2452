//! Latching alarm manager with edge-triggered reset.
//!
//! The raw fault signal feeds a latch. `Unacked` holds the horn steady —
//! also after the raw fault has already passed — until the operator's
//! reset edge. Acknowledging while the fault persists moves to `Acked`,
//! which blinks on the configured duty cycle until the fault actually
//! clears; acknowledging after the fault has passed clears outright.
//! The manager never divides by zero: a zero blink period degrades to
//! steady-on while acknowledged.

use dryctl_common::state::AlarmLatch;

/// Alarm latch + blink cycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlarmManager {
    latch: AlarmLatch,
    blink_ticks: u32,
}

impl AlarmManager {
    /// Current latch state.
    #[inline]
    pub const fn latch(&self) -> AlarmLatch {
        self.latch
    }

    /// Force the latch to `Unacked` (power-guard path).
    ///
    /// A power loss always demands a fresh acknowledgment, even if an
    /// earlier fault was already acknowledged.
    pub fn force_latch(&mut self) {
        self.latch = AlarmLatch::Unacked;
        self.blink_ticks = 0;
    }

    /// Advance one tick and return the alarm output.
    ///
    /// `fault` is the aggregated raw fault signal for this tick;
    /// `reset_edge` is the debounced rising edge of the reset pushbutton,
    /// already gated on `power_ok` by the caller.
    pub fn step(
        &mut self,
        fault: bool,
        reset_edge: bool,
        enabled: bool,
        on_ticks: u32,
        off_ticks: u32,
    ) -> bool {
        match self.latch {
            AlarmLatch::Clear => {
                if fault {
                    self.latch = AlarmLatch::Unacked;
                    true
                } else {
                    false
                }
            }
            AlarmLatch::Unacked => {
                if reset_edge {
                    if fault {
                        self.latch = AlarmLatch::Acked;
                        self.blink_ticks = 0;
                        self.blink_output(enabled, on_ticks, off_ticks)
                    } else {
                        self.latch = AlarmLatch::Clear;
                        false
                    }
                } else {
                    true
                }
            }
            AlarmLatch::Acked => {
                if !fault {
                    self.latch = AlarmLatch::Clear;
                    self.blink_ticks = 0;
                    false
                } else {
                    self.blink_output(enabled, on_ticks, off_ticks)
                }
            }
        }
    }

    /// Blink output while acknowledged: ON for the first `on_ticks` of each
    /// `on_ticks + off_ticks` period. Disabled output stays silent; a zero
    /// period degrades to steady-on.
    fn blink_output(&mut self, enabled: bool, on_ticks: u32, off_ticks: u32) -> bool {
        if !enabled {
            return false;
        }
        let period = on_ticks.saturating_add(off_ticks);
        if period == 0 {
            return true;
        }
        let out = self.blink_ticks % period < on_ticks;
        self.blink_ticks = if self.blink_ticks + 1 >= period {
            0
        } else {
            self.blink_ticks + 1
        };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON: u32 = 3;
    const OFF: u32 = 2;

    #[test]
    fn fault_latches_and_holds_steady() {
        let mut alarm = AlarmManager::default();
        assert!(alarm.step(true, false, true, ON, OFF));
        assert_eq!(alarm.latch(), AlarmLatch::Unacked);

        // Raw fault passes — the latch keeps the horn on.
        for _ in 0..10 {
            assert!(alarm.step(false, false, true, ON, OFF));
        }
        assert_eq!(alarm.latch(), AlarmLatch::Unacked);
    }

    #[test]
    fn reset_with_fault_gone_clears() {
        let mut alarm = AlarmManager::default();
        alarm.step(true, false, true, ON, OFF);
        alarm.step(false, false, true, ON, OFF);

        assert!(!alarm.step(false, true, true, ON, OFF));
        assert_eq!(alarm.latch(), AlarmLatch::Clear);
    }

    #[test]
    fn reset_with_fault_present_starts_blinking() {
        let mut alarm = AlarmManager::default();
        alarm.step(true, false, true, ON, OFF);

        // Acknowledge while the fault persists: blinking, not clear.
        let mut pattern = vec![alarm.step(true, true, true, ON, OFF)];
        for _ in 0..9 {
            pattern.push(alarm.step(true, false, true, ON, OFF));
        }
        assert_eq!(alarm.latch(), AlarmLatch::Acked);
        let expected: Vec<bool> = (0..10).map(|t| t % (ON + OFF) < ON).collect();
        assert_eq!(pattern, expected);
    }

    #[test]
    fn acked_clears_itself_when_fault_resolves() {
        let mut alarm = AlarmManager::default();
        alarm.step(true, false, true, ON, OFF);
        alarm.step(true, true, true, ON, OFF);
        assert_eq!(alarm.latch(), AlarmLatch::Acked);

        assert!(!alarm.step(false, false, true, ON, OFF));
        assert_eq!(alarm.latch(), AlarmLatch::Clear);
    }

    #[test]
    fn disabled_alarm_is_silent_while_acked() {
        let mut alarm = AlarmManager::default();
        // Unacked ignores the enable flag: the latch is always announced.
        assert!(alarm.step(true, false, false, ON, OFF));

        alarm.step(true, true, false, ON, OFF);
        assert_eq!(alarm.latch(), AlarmLatch::Acked);
        for _ in 0..5 {
            assert!(!alarm.step(true, false, false, ON, OFF));
        }
    }

    #[test]
    fn zero_blink_period_degrades_to_steady_on() {
        let mut alarm = AlarmManager::default();
        alarm.step(true, false, true, 0, 0);
        alarm.step(true, true, true, 0, 0);
        for _ in 0..5 {
            assert!(alarm.step(true, false, true, 0, 0));
        }
    }

    #[test]
    fn new_fault_after_clear_latches_again() {
        let mut alarm = AlarmManager::default();
        alarm.step(true, false, true, ON, OFF);
        alarm.step(false, true, true, ON, OFF);
        assert_eq!(alarm.latch(), AlarmLatch::Clear);

        assert!(alarm.step(true, false, true, ON, OFF));
        assert_eq!(alarm.latch(), AlarmLatch::Unacked);
    }

    #[test]
    fn force_latch_revokes_acknowledgment() {
        let mut alarm = AlarmManager::default();
        alarm.step(true, false, true, ON, OFF);
        alarm.step(true, true, true, ON, OFF);
        assert_eq!(alarm.latch(), AlarmLatch::Acked);

        alarm.force_latch();
        assert_eq!(alarm.latch(), AlarmLatch::Unacked);
        assert!(alarm.step(true, false, true, ON, OFF));
    }
}
