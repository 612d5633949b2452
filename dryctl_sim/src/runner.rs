//! Control loop runner: mode switching and parameter commits.
//!
//! Owns the engine state, the committed parameter snapshot and the
//! auto/manual mode. In `Auto` every step runs one engine tick; in
//! `Manual` the operator's output frame passes straight through and the
//! engine is not invoked. Entering manual discards engine state; leaving
//! it emits one all-off frame so automatic control always resumes from
//! `Stopped` with no phantom duty cycles or stale pilot timers.

use dryctl_common::io::{Inputs, Outputs};
use dryctl_common::params::{ParameterPatch, Parameters};
use dryctl_engine::{tick, EngineState};

/// Control ownership mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// The engine drives the outputs.
    Auto,
    /// Operator pass-through; the engine is suspended.
    Manual,
}

/// Per-device control loop.
///
/// One instance per controlled device; instances share nothing.
#[derive(Debug, Clone)]
pub struct ControlLoop {
    params: Parameters,
    state: EngineState,
    mode: ControlMode,
    manual: Outputs,
}

impl ControlLoop {
    /// Create a loop in `Auto` mode with a sanitized parameter snapshot.
    pub fn new(params: Parameters) -> Self {
        Self {
            params: params.sanitize(),
            state: EngineState::default(),
            mode: ControlMode::Auto,
            manual: Outputs::all_off(),
        }
    }

    /// Committed parameter snapshot.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Current engine state (diagnostics).
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Current mode.
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Merge an operator edit and commit the clamped result.
    pub fn apply_patch(&mut self, patch: &ParameterPatch) {
        self.params = self.params.update(patch).sanitize();
    }

    /// Enter manual override. Engine state is discarded; the pass-through
    /// frame starts all-off.
    pub fn enter_manual(&mut self) {
        if self.mode == ControlMode::Manual {
            return;
        }
        self.mode = ControlMode::Manual;
        self.state = EngineState::default();
        self.manual = Outputs::all_off();
    }

    /// Leave manual override.
    ///
    /// Returns the all-off frame the caller must deliver before the next
    /// automatic step; the engine resumes from `Stopped`.
    pub fn leave_manual(&mut self) -> Outputs {
        self.mode = ControlMode::Auto;
        self.state = EngineState::default();
        self.manual = Outputs::all_off();
        Outputs::all_off()
    }

    /// Operator's manual output frame. `None` while in `Auto`.
    pub fn manual_outputs_mut(&mut self) -> Option<&mut Outputs> {
        match self.mode {
            ControlMode::Manual => Some(&mut self.manual),
            ControlMode::Auto => None,
        }
    }

    /// Run one step: an engine tick in `Auto`, pass-through in `Manual`.
    pub fn step(&mut self, inputs: &Inputs) -> Outputs {
        match self.mode {
            ControlMode::Auto => {
                let (outputs, next) = tick(inputs, &self.params, &self.state);
                self.state = next;
                outputs
            }
            ControlMode::Manual => self.manual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dryctl_common::state::CascadePhase;

    fn running_inputs() -> Inputs {
        Inputs {
            run_enable: true,
            process_temperature: 20.0,
            valve_open_limit: true,
            valve_closed_limit: false,
            ..Default::default()
        }
    }

    fn loop_with_low_setpoint() -> ControlLoop {
        ControlLoop::new(Parameters {
            temp_setpoint: 25.0,
            ..Default::default()
        })
    }

    #[test]
    fn auto_mode_runs_the_engine() {
        let mut cl = loop_with_low_setpoint();
        let out = cl.step(&running_inputs());
        assert!(out.main_feed);
        assert_eq!(cl.state().phase, CascadePhase::Running);
    }

    #[test]
    fn manual_mode_bypasses_the_engine() {
        let mut cl = loop_with_low_setpoint();
        cl.step(&running_inputs());
        cl.enter_manual();

        // Operator drives the fan alone; the demanding inputs are ignored.
        cl.manual_outputs_mut().unwrap().fan = true;
        let out = cl.step(&running_inputs());
        assert!(out.fan);
        assert!(!out.main_feed);
    }

    #[test]
    fn entering_manual_discards_engine_state() {
        let mut cl = loop_with_low_setpoint();
        for _ in 0..7 {
            cl.step(&running_inputs());
        }
        assert!(cl.state().vibrator_duty.counter() > 0);

        cl.enter_manual();
        assert_eq!(*cl.state(), EngineState::default());
    }

    #[test]
    fn leaving_manual_forces_all_off_and_resumes_from_stopped() {
        let mut cl = loop_with_low_setpoint();
        cl.enter_manual();
        cl.manual_outputs_mut().unwrap().main_feed = true;

        let safe = cl.leave_manual();
        assert_eq!(safe, Outputs::all_off());
        assert_eq!(cl.mode(), ControlMode::Auto);
        assert_eq!(cl.state().phase, CascadePhase::Stopped);

        // First automatic step starts a fresh cascade.
        let out = cl.step(&running_inputs());
        assert_eq!(cl.state().vibrator_duty.counter(), 1);
        assert!(out.main_feed);
    }

    #[test]
    fn manual_outputs_unavailable_in_auto() {
        let mut cl = loop_with_low_setpoint();
        assert!(cl.manual_outputs_mut().is_none());
    }

    #[test]
    fn patches_are_sanitized_on_commit() {
        let mut cl = loop_with_low_setpoint();
        cl.apply_patch(&ParameterPatch {
            temp_setpoint: Some(400.0),
            humidity_setpoint: Some(5.0),
            ..Default::default()
        });
        assert_eq!(cl.params().temp_setpoint, 165.0);
        assert_eq!(cl.params().humidity_setpoint, 20.0);
    }
}
