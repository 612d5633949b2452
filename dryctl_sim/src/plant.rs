//! Deterministic plant simulator.
//!
//! Emulates the dryer's physical responses behind the same port traits the
//! real telemetry adapter implements: the fire-cutoff valve travels over a
//! configured number of ticks between its limit switches, the furnace
//! temperature relaxes toward ambient plus the heat input from the feed
//! train, and the chamber humidity relaxes toward its damper-dependent
//! target. All motion is deterministic so simulated batches replay
//! identically.

use dryctl_common::io::{InputSource, Inputs, OutputSink, Outputs};
use serde::{Deserialize, Serialize};

/// Plant model tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    /// Valve travel time between limits [ticks]. Minimum 1.
    pub valve_travel_s: u32,
    /// Ambient temperature the furnace relaxes toward [°C].
    pub ambient_temp: f64,
    /// Temperature gained per tick while the main feed burns [°C].
    pub heating_rate: f64,
    /// Temperature gained per tick from the secondary feed alone [°C].
    pub pilot_heating_rate: f64,
    /// Fraction of the ambient gap closed per tick.
    pub cooling_factor: f64,
    /// Ambient humidity the chamber relaxes toward with the damper shut [%].
    pub ambient_humidity: f64,
    /// Dry-air humidity the chamber relaxes toward with the damper open [%].
    pub dry_humidity: f64,
    /// Fraction of the humidity gap closed per tick.
    pub humidity_factor: f64,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            valve_travel_s: 4,
            ambient_temp: 25.0,
            heating_rate: 0.8,
            pilot_heating_rate: 0.2,
            cooling_factor: 0.01,
            ambient_humidity: 60.0,
            dry_humidity: 20.0,
            humidity_factor: 0.02,
        }
    }
}

/// Simulated plant: actuator frame in, input frame out.
#[derive(Debug, Clone)]
pub struct PlantSimulator {
    config: PlantConfig,
    actuators: Outputs,
    /// Valve position, 0 = closed limit .. `valve_travel_s` = open limit.
    valve_position: u32,
    temperature: f64,
    humidity: f64,
    power_ok: bool,
    run_enable: bool,
    reset: bool,
}

impl PlantSimulator {
    /// Create a plant at rest: valve closed, ambient readings, powered.
    pub fn new(config: PlantConfig) -> Self {
        let config = PlantConfig {
            // A zero travel time would assert both limit switches at once.
            valve_travel_s: config.valve_travel_s.max(1),
            ..config
        };
        Self {
            temperature: config.ambient_temp,
            humidity: config.ambient_humidity,
            config,
            actuators: Outputs::default(),
            valve_position: 0,
            power_ok: true,
            run_enable: false,
            reset: false,
        }
    }

    /// Operator: mains power present.
    pub fn set_power(&mut self, on: bool) {
        self.power_ok = on;
    }

    /// Operator: enable/auto-cycle command.
    pub fn set_run_enable(&mut self, on: bool) {
        self.run_enable = on;
    }

    /// Operator: reset pushbutton level.
    pub fn set_reset(&mut self, pressed: bool) {
        self.reset = pressed;
    }

    /// Current simulated temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Current simulated humidity.
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Advance the plant one tick from the last written actuator frame.
    pub fn step(&mut self) {
        // Valve travel. De-energized (or unpowered) the valve springs closed.
        let opening = self.actuators.fire_cutoff_valve && self.power_ok;
        if opening {
            self.valve_position = (self.valve_position + 1).min(self.config.valve_travel_s);
        } else {
            self.valve_position = self.valve_position.saturating_sub(1);
        }

        // Furnace temperature: heat input only while powered and fed.
        let mut heat = 0.0;
        if self.power_ok {
            if self.actuators.main_feed && self.actuators.fan {
                heat += self.config.heating_rate;
            }
            if self.actuators.secondary_feed {
                heat += self.config.pilot_heating_rate;
            }
        }
        self.temperature += heat;
        self.temperature += (self.config.ambient_temp - self.temperature) * self.config.cooling_factor;

        // Chamber humidity relaxes toward the damper-dependent target.
        let target = if self.actuators.damper {
            self.config.dry_humidity
        } else {
            self.config.ambient_humidity
        };
        self.humidity += (target - self.humidity) * self.config.humidity_factor;
    }
}

impl InputSource for PlantSimulator {
    fn read_inputs(&self) -> Inputs {
        Inputs {
            power_ok: self.power_ok,
            run_enable: self.run_enable,
            reset: self.reset,
            valve_open_limit: self.valve_position >= self.config.valve_travel_s,
            valve_closed_limit: self.valve_position == 0,
            process_temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}

impl OutputSink for PlantSimulator {
    fn write_outputs(&mut self, outputs: &Outputs) {
        self.actuators = *outputs;
    }
}
