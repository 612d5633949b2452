//! Interlock & power guard.
//!
//! Evaluated before everything else each tick. A phase/power loss forces
//! the fully de-energized output frame with the alarm energized; no other
//! component may re-enable an output in the same tick.

use dryctl_common::io::{Inputs, Outputs};

/// Check the power interlock.
///
/// Returns the forced output frame when mains power is absent, `None` when
/// normal evaluation may proceed. The caller must also reset the cascade
/// to `Stopped`, zero all duty/dwell counters and set the alarm latch.
#[inline]
pub fn check(inputs: &Inputs) -> Option<Outputs> {
    if inputs.power_ok {
        None
    } else {
        Some(Outputs::power_loss())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_ok_passes_through() {
        let inputs = Inputs::default();
        assert!(check(&inputs).is_none());
    }

    #[test]
    fn power_loss_forces_de_energized_frame() {
        let inputs = Inputs {
            power_ok: false,
            run_enable: true,
            valve_open_limit: true,
            ..Default::default()
        };
        let out = check(&inputs).unwrap();
        assert_eq!(out, Outputs::power_loss());
        assert!(out.alarm);
        assert!(!out.main_feed);
        assert!(!out.fan);
    }
}
