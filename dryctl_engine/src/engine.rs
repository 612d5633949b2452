//! `EngineState` and the per-tick orchestration.
//!
//! Evaluation order within a tick (precedence, highest first):
//!
//! 1. Power guard — short-circuits the tick with the de-energized frame.
//! 2. Cascade sequencer — fan, fire-cutoff valve, main feed.
//! 3. Duty controllers — secondary feed and vibrator pulses.
//! 4. Pilot-flame dwell — heat maintenance via the secondary feed screw.
//! 5. Humidity damper — independent two-point loop.
//! 6. Valve watchdog + fault aggregation.
//! 7. Alarm manager — derives the alarm output from faults and reset.
//!
//! The output frame is rebuilt from scratch every tick; nothing is carried
//! over except through the explicit state value.

use dryctl_common::io::{Inputs, Outputs};
use dryctl_common::params::Parameters;
use dryctl_common::state::{CascadePhase, FaultFlags};

use crate::alarm::AlarmManager;
use crate::duty::DutyCycle;
use crate::pilot::PilotDwell;
use crate::valve::ValveWatch;
use crate::{cascade, guard, humidity};

/// Engine state threaded through successive `tick` calls.
///
/// Owned exclusively by the control engine; callers treat it as opaque
/// apart from reading the diagnostic fields. A fresh `Default` value is
/// the neutral state to resume from after manual override or session end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineState {
    /// Cascade sequencer phase.
    pub phase: CascadePhase,
    /// Vibrator duty cycle (governed by the main feed).
    pub vibrator_duty: DutyCycle,
    /// Secondary feed duty cycle (governed by the cascade being active).
    pub secondary_duty: DutyCycle,
    /// Pilot-flame dwell counter.
    pub pilot: PilotDwell,
    /// Fire-cutoff valve travel watchdog.
    pub valve_watch: ValveWatch,
    /// Damper state held across ticks inside the humidity band.
    pub damper_open: bool,
    /// Alarm latch + blink cycle.
    pub alarm: AlarmManager,
    /// Fault conditions observed on the last tick (diagnostics).
    pub faults: FaultFlags,
    /// Previous tick's reset input, for edge detection.
    pub prev_reset: bool,
}

/// Run one control tick.
///
/// Pure function over the sampled inputs, the committed parameter snapshot
/// and the previous state. Never fails and never blocks; the caller owns
/// the 1 Hz cadence.
pub fn tick(inputs: &Inputs, params: &Parameters, state: &EngineState) -> (Outputs, EngineState) {
    let mut next = *state;

    // ── 1. Power guard ──
    if let Some(forced) = guard::check(inputs) {
        next.phase = CascadePhase::Stopped;
        next.vibrator_duty.reset();
        next.secondary_duty.reset();
        next.pilot.reset();
        next.valve_watch.reset();
        next.alarm.force_latch();
        next.faults = FaultFlags::POWER_LOSS;
        // Edges are only observed while powered; absorb any reset press.
        next.prev_reset = inputs.reset;
        return (forced, next);
    }

    let mut out = Outputs::default();

    // ── 2. Cascade sequencer ──
    let demand = cascade::start_demand(inputs, params);
    next.phase = cascade::next_phase(demand, inputs.valve_open_limit);
    cascade::apply(next.phase, &mut out);

    // ── 3. Duty controllers ──
    out.secondary_feed = next.secondary_duty.step(
        next.phase.is_active(),
        params.secondary_on_s,
        params.secondary_off_s,
    );
    out.vibrator = next
        .vibrator_duty
        .step(out.main_feed, params.vibrator_on_s, params.vibrator_off_s);

    // ── 4. Pilot-flame dwell ──
    let hysteresis = params.temp_hysteresis.max(0.0);
    let in_band = (inputs.process_temperature - params.temp_setpoint).abs() <= hysteresis;
    let pilot_on = next.pilot.step(
        in_band,
        params.pilot_wait_min.saturating_mul(60),
        params.pilot_active_s,
    );
    if pilot_on {
        out.secondary_feed = true;
    }

    // ── 5. Humidity damper ──
    next.damper_open = humidity::damper_command(
        state.damper_open,
        inputs.humidity,
        params.humidity_setpoint,
        params.humidity_hysteresis,
        params.damper_close_mode,
    );
    out.damper = next.damper_open;

    // ── 6. Fault aggregation ──
    let mut faults = next.valve_watch.step(
        out.fire_cutoff_valve,
        inputs.valve_open_limit,
        inputs.valve_closed_limit,
        params.valve_travel_timeout_s,
    );
    if humidity::out_of_band(
        inputs.humidity,
        params.humidity_setpoint,
        params.humidity_hysteresis,
    ) {
        faults |= FaultFlags::HUMIDITY_BAND;
    }
    next.faults = faults;

    // ── 7. Alarm manager ──
    let reset_edge = inputs.reset && !state.prev_reset;
    out.alarm = next.alarm.step(
        !faults.is_empty(),
        reset_edge,
        params.alarm_enabled,
        params.alarm_on_min.saturating_mul(60),
        params.alarm_off_min.saturating_mul(60),
    );
    next.prev_reset = inputs.reset;

    (out, next)
}
