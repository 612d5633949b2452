//! # Dryctl Simulator & Runner
//!
//! Development host for the control engine without physical hardware:
//! a deterministic plant simulator behind the same `InputSource` /
//! `OutputSink` ports the telemetry adapter implements, and the
//! `ControlLoop` runner that owns the tick cadence, the parameter
//! snapshot and the auto/manual mode switch.

pub mod plant;
pub mod runner;
