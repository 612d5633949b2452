//! I/O snapshot types and the telemetry port traits.
//!
//! `Inputs` and `Outputs` are pure data: one sampled frame of the machine's
//! discrete/analog inputs and one frame of actuator commands. The engine
//! consumes and produces only these; how frames arrive and leave (MQTT
//! telemetry, a plant simulator, a test harness) is behind the
//! [`InputSource`] / [`OutputSink`] seams.

use serde::{Deserialize, Serialize};

/// One sampled frame of machine inputs.
///
/// All discrete inputs are active-high after the telemetry layer has applied
/// any NO/NC interpretation. `reset` is a momentary pushbutton — only its
/// rising edge is meaningful to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Mains power / phase presence. False is the highest-priority fault.
    pub power_ok: bool,
    /// Operator enable / auto-cycle command.
    pub run_enable: bool,
    /// Momentary alarm-reset pushbutton.
    pub reset: bool,
    /// Fire-cutoff valve fully-open limit switch.
    pub valve_open_limit: bool,
    /// Fire-cutoff valve fully-closed limit switch.
    pub valve_closed_limit: bool,
    /// Process temperature [°C or °F per configured unit].
    pub process_temperature: f64,
    /// Relative humidity [%].
    pub humidity: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        // A machine at rest: powered, disabled, valve confirmed closed,
        // sensors reading unremarkable ambient values.
        Self {
            power_ok: true,
            run_enable: false,
            reset: false,
            valve_open_limit: false,
            valve_closed_limit: true,
            process_temperature: 25.0,
            humidity: 40.0,
        }
    }
}

/// One frame of actuator commands. All outputs default to de-energized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Main feed screw.
    pub main_feed: bool,
    /// Secondary (fuel) feed screw.
    pub secondary_feed: bool,
    /// Material vibrator.
    pub vibrator: bool,
    /// Combustion/drying fan.
    pub fan: bool,
    /// Fire-cutoff valve actuator (true = energized, commanding open).
    pub fire_cutoff_valve: bool,
    /// Humidity damper (true = open).
    pub damper: bool,
    /// Alarm horn/lamp.
    pub alarm: bool,
}

impl Outputs {
    /// The fully de-energized frame.
    pub const fn all_off() -> Self {
        Self {
            main_feed: false,
            secondary_feed: false,
            vibrator: false,
            fan: false,
            fire_cutoff_valve: false,
            damper: false,
            alarm: false,
        }
    }

    /// The power-loss frame: everything off, alarm energized.
    pub const fn power_loss() -> Self {
        Self {
            main_feed: false,
            secondary_feed: false,
            vibrator: false,
            fan: false,
            fire_cutoff_valve: false,
            damper: false,
            alarm: true,
        }
    }
}

/// Produces input frames for the control loop.
///
/// Implemented by the telemetry adapter in production and by the plant
/// simulator in development. Sampling must not block the tick cadence.
pub trait InputSource {
    /// Sample the current input frame.
    fn read_inputs(&self) -> Inputs;
}

/// Consumes output frames from the control loop.
///
/// Implemented by the telemetry adapter (command publication) and by the
/// plant simulator (actuators drive the simulated process).
pub trait OutputSink {
    /// Deliver one output frame.
    fn write_outputs(&mut self, outputs: &Outputs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outputs_default_is_de_energized() {
        assert_eq!(Outputs::default(), Outputs::all_off());
    }

    #[test]
    fn power_loss_frame_only_energizes_alarm() {
        let out = Outputs::power_loss();
        assert!(out.alarm);
        assert!(!out.main_feed);
        assert!(!out.secondary_feed);
        assert!(!out.vibrator);
        assert!(!out.fan);
        assert!(!out.fire_cutoff_valve);
        assert!(!out.damper);
    }

    #[test]
    fn inputs_default_is_powered_and_idle() {
        let inp = Inputs::default();
        assert!(inp.power_ok);
        assert!(!inp.run_enable);
        assert!(inp.valve_closed_limit);
        assert!(!inp.valve_open_limit);
    }
}
