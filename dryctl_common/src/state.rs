//! Externally visible engine state enums and fault flags.
//!
//! All enums use `#[repr(u8)]` with `from_u8` round-trips so the telemetry
//! layer can report them as compact integers. `FaultFlags` aggregates the
//! per-tick fault conditions that feed the alarm manager.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

// ─── Cascade Phase ──────────────────────────────────────────────────

/// Start/stop cascade sequencer phase.
///
/// Recomputed every tick from the start/stop condition and the fire-cutoff
/// valve's open limit switch. `Running` is only reachable while the open
/// limit is confirmed in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CascadePhase {
    /// Feed train at rest, valve commanded closed.
    Stopped = 0,
    /// Fan, secondary feed and valve energized; waiting for the open limit.
    Starting = 1,
    /// Open limit confirmed; main feed and vibrator released.
    Running = 2,
}

impl CascadePhase {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Stopped),
            1 => Some(Self::Starting),
            2 => Some(Self::Running),
            _ => None,
        }
    }

    /// True while the feed train is energized (fan, valve, secondary feed).
    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Starting | Self::Running)
    }
}

impl Default for CascadePhase {
    fn default() -> Self {
        Self::Stopped
    }
}

// ─── Alarm Latch ────────────────────────────────────────────────────

/// Alarm manager latch state.
///
/// The latch, once set, outlives the raw fault condition: `Unacked` holds
/// the horn steady until an edge-triggered reset, and `Acked` blinks until
/// the raw fault actually clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AlarmLatch {
    /// No fault latched.
    Clear = 0,
    /// Fault latched, not yet acknowledged — steady output.
    Unacked = 1,
    /// Fault acknowledged but still present — cyclic output.
    Acked = 2,
}

impl AlarmLatch {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Clear),
            1 => Some(Self::Unacked),
            2 => Some(Self::Acked),
            _ => None,
        }
    }
}

impl Default for AlarmLatch {
    fn default() -> Self {
        Self::Clear
    }
}

// ─── Fault Flags ────────────────────────────────────────────────────

bitflags! {
    /// Per-tick fault conditions feeding the alarm manager.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FaultFlags: u8 {
        /// Mains power / phase lost.
        const POWER_LOSS    = 0x01;
        /// Humidity outside the configured band.
        const HUMIDITY_BAND = 0x02;
        /// Fire-cutoff valve did not reach the commanded limit in time.
        const VALVE_TRAVEL  = 0x04;
        /// Both valve limit switches asserted — sensor conflict.
        const VALVE_SENSOR  = 0x08;
    }
}

impl Default for FaultFlags {
    fn default() -> Self {
        Self::empty()
    }
}
