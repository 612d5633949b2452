//! Start/stop cascade sequencer for the feed train.
//!
//! Forward order: fan + secondary feed + fire-cutoff valve first, main feed
//! only once the valve's open limit is confirmed. Reverse order on stop:
//! feed train off, then the valve is de-energized (commanding close).
//!
//! The phase is recomputed every tick from the start/stop condition and the
//! open limit switch, so losing the limit while `Running` demotes back to
//! `Starting` and drops the main feed in the same tick. The valve's travel
//! is an external signal — never assumed instantaneous.

use dryctl_common::io::{Inputs, Outputs};
use dryctl_common::params::Parameters;
use dryctl_common::state::CascadePhase;

/// Heat demand: operator enabled and process temperature below setpoint.
#[inline]
pub fn start_demand(inputs: &Inputs, params: &Parameters) -> bool {
    inputs.run_enable && inputs.process_temperature < params.temp_setpoint
}

/// Compute the phase for this tick.
#[inline]
pub fn next_phase(demand: bool, valve_open_limit: bool) -> CascadePhase {
    if !demand {
        CascadePhase::Stopped
    } else if valve_open_limit {
        CascadePhase::Running
    } else {
        CascadePhase::Starting
    }
}

/// Drive the primary actuators for the given phase.
///
/// The duty-governed actuators (vibrator, secondary feed) are written by
/// their duty controllers afterwards; this only sets fan, valve and main
/// feed.
pub fn apply(phase: CascadePhase, outputs: &mut Outputs) {
    match phase {
        CascadePhase::Stopped => {
            outputs.main_feed = false;
            outputs.fan = false;
            outputs.fire_cutoff_valve = false;
        }
        CascadePhase::Starting => {
            outputs.main_feed = false;
            outputs.fan = true;
            outputs.fire_cutoff_valve = true;
        }
        CascadePhase::Running => {
            outputs.main_feed = true;
            outputs.fan = true;
            outputs.fire_cutoff_valve = true;
        }
    }
}
