//! Operator parameters: setpoints, hystereses and timer durations.
//!
//! `Parameters` is the immutable-per-tick snapshot the engine reads.
//! Edits arrive as a [`ParameterPatch`] (only the supplied fields change)
//! and are clamped by [`Parameters::sanitize`] at the operator boundary
//! before the merged snapshot is committed. The engine trusts committed
//! parameters but still clamps thresholds defensively at the point of use.

use serde::{Deserialize, Serialize};

/// Temperature unit for the process setpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TempUnit {
    /// Degrees Celsius.
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit.
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TempUnit {
    /// Maximum allowed temperature setpoint in this unit.
    #[inline]
    pub const fn max_setpoint(&self) -> f64 {
        match self {
            Self::Celsius => 165.0,
            Self::Fahrenheit => 329.0,
        }
    }
}

impl Default for TempUnit {
    fn default() -> Self {
        Self::Celsius
    }
}

/// Damper close threshold variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DamperCloseMode {
    /// Close when humidity rises above `setpoint + hysteresis`.
    SymmetricBand,
    /// Close as soon as humidity rises above the setpoint itself.
    AboveSetpoint,
}

impl Default for DamperCloseMode {
    fn default() -> Self {
        Self::SymmetricBand
    }
}

/// Operator-configurable parameter snapshot.
///
/// Second-valued durations convert 1:1 to ticks at the 1 Hz cadence;
/// minute-valued durations convert ×60.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Process temperature setpoint [°C or °F per `temp_unit`].
    pub temp_setpoint: f64,
    /// Temperature hysteresis band half-width.
    pub temp_hysteresis: f64,
    /// Unit of `temp_setpoint`.
    pub temp_unit: TempUnit,

    /// Humidity setpoint [%].
    pub humidity_setpoint: f64,
    /// Humidity hysteresis band half-width [%].
    pub humidity_hysteresis: f64,
    /// Damper close threshold variant.
    pub damper_close_mode: DamperCloseMode,

    /// Vibrator duty ON duration [s].
    pub vibrator_on_s: u32,
    /// Vibrator duty OFF duration [s].
    pub vibrator_off_s: u32,

    /// Secondary feed duty ON duration [s].
    pub secondary_on_s: u32,
    /// Secondary feed duty OFF duration [s].
    pub secondary_off_s: u32,

    /// Alarm blink ON duration [min].
    pub alarm_on_min: u32,
    /// Alarm blink OFF duration [min].
    pub alarm_off_min: u32,
    /// Whether the acknowledged alarm output is enabled at all.
    pub alarm_enabled: bool,

    /// Pilot-flame active window [s].
    pub pilot_active_s: u32,
    /// Dwell required in-band before the pilot activates [min].
    pub pilot_wait_min: u32,

    /// Fire-cutoff valve travel watchdog [s]. Zero disables the watchdog.
    pub valve_travel_timeout_s: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            temp_setpoint: 120.0,
            temp_hysteresis: 2.0,
            temp_unit: TempUnit::Celsius,
            humidity_setpoint: 40.0,
            humidity_hysteresis: 5.0,
            damper_close_mode: DamperCloseMode::SymmetricBand,
            vibrator_on_s: 5,
            vibrator_off_s: 15,
            secondary_on_s: 10,
            secondary_off_s: 10,
            alarm_on_min: 1,
            alarm_off_min: 1,
            alarm_enabled: true,
            pilot_active_s: 30,
            pilot_wait_min: 10,
            valve_travel_timeout_s: 10,
        }
    }
}

impl Parameters {
    /// Merge a partial update over this snapshot, returning the new snapshot.
    ///
    /// Only the fields present in `patch` change. The result is NOT
    /// sanitized — callers clamp via [`Parameters::sanitize`] before
    /// committing.
    pub fn update(&self, patch: &ParameterPatch) -> Self {
        Self {
            temp_setpoint: patch.temp_setpoint.unwrap_or(self.temp_setpoint),
            temp_hysteresis: patch.temp_hysteresis.unwrap_or(self.temp_hysteresis),
            temp_unit: patch.temp_unit.unwrap_or(self.temp_unit),
            humidity_setpoint: patch.humidity_setpoint.unwrap_or(self.humidity_setpoint),
            humidity_hysteresis: patch.humidity_hysteresis.unwrap_or(self.humidity_hysteresis),
            damper_close_mode: patch.damper_close_mode.unwrap_or(self.damper_close_mode),
            vibrator_on_s: patch.vibrator_on_s.unwrap_or(self.vibrator_on_s),
            vibrator_off_s: patch.vibrator_off_s.unwrap_or(self.vibrator_off_s),
            secondary_on_s: patch.secondary_on_s.unwrap_or(self.secondary_on_s),
            secondary_off_s: patch.secondary_off_s.unwrap_or(self.secondary_off_s),
            alarm_on_min: patch.alarm_on_min.unwrap_or(self.alarm_on_min),
            alarm_off_min: patch.alarm_off_min.unwrap_or(self.alarm_off_min),
            alarm_enabled: patch.alarm_enabled.unwrap_or(self.alarm_enabled),
            pilot_active_s: patch.pilot_active_s.unwrap_or(self.pilot_active_s),
            pilot_wait_min: patch.pilot_wait_min.unwrap_or(self.pilot_wait_min),
            valve_travel_timeout_s: patch
                .valve_travel_timeout_s
                .unwrap_or(self.valve_travel_timeout_s),
        }
    }

    /// Clamp all operator-editable values into their legal ranges.
    ///
    /// Applied at the operator boundary before a merged snapshot is
    /// committed: temperature setpoint in `[0, unit maximum]`, hystereses
    /// at least 1, humidity setpoint in `[20, 100] %`.
    pub fn sanitize(&self) -> Self {
        let mut s = *self;
        s.temp_setpoint = s.temp_setpoint.clamp(0.0, s.temp_unit.max_setpoint());
        s.temp_hysteresis = s.temp_hysteresis.max(1.0);
        s.humidity_setpoint = s.humidity_setpoint.clamp(20.0, 100.0);
        s.humidity_hysteresis = s.humidity_hysteresis.max(1.0);
        s
    }
}

/// Partial parameter update: only supplied fields are merged.
///
/// Deserialized from operator edits with strict typing — a missing field
/// means "keep the current value", never an implicit zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterPatch {
    pub temp_setpoint: Option<f64>,
    pub temp_hysteresis: Option<f64>,
    pub temp_unit: Option<TempUnit>,
    pub humidity_setpoint: Option<f64>,
    pub humidity_hysteresis: Option<f64>,
    pub damper_close_mode: Option<DamperCloseMode>,
    pub vibrator_on_s: Option<u32>,
    pub vibrator_off_s: Option<u32>,
    pub secondary_on_s: Option<u32>,
    pub secondary_off_s: Option<u32>,
    pub alarm_on_min: Option<u32>,
    pub alarm_off_min: Option<u32>,
    pub alarm_enabled: Option<bool>,
    pub pilot_active_s: Option<u32>,
    pub pilot_wait_min: Option<u32>,
    pub valve_travel_timeout_s: Option<u32>,
}
