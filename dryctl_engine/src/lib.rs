//! # Dryctl Control Engine
//!
//! Tick-driven process control for a batch drying machine: a cascading
//! start/stop sequencer for the feed train, duty-cycle timers for the
//! vibrator and secondary feed screw, a pilot-flame dwell controller, an
//! independent humidity damper loop, and a latching alarm manager with
//! edge-triggered reset.
//!
//! The engine is a pure, single-threaded function over one input snapshot,
//! one parameter snapshot and the previous [`EngineState`]:
//!
//! ```text
//! tick(inputs, params, state) -> (Outputs, EngineState)
//! ```
//!
//! It performs no I/O, never blocks and never fails; the caller owns the
//! 1 Hz cadence and threads the state value through successive calls.
//! Evaluation order per tick: the power guard first (it short-circuits
//! everything), then the cascade sequencer, the duty controllers, the
//! pilot and humidity loops, and finally the alarm manager.

pub mod alarm;
pub mod cascade;
pub mod duty;
pub mod engine;
pub mod guard;
pub mod humidity;
pub mod pilot;
pub mod valve;

pub use engine::{tick, EngineState};
