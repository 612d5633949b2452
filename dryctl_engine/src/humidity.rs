//! Humidity/damper two-point controller.
//!
//! Independent of the cascade: the damper opens when humidity falls below
//! `setpoint - hysteresis`, closes above the configured close threshold,
//! and holds its previous state inside the band. Non-latching — no reset
//! interaction. Humidity outside the symmetric band on either side is a
//! fault condition for the alarm manager.

use dryctl_common::params::DamperCloseMode;

/// Compute the damper command for this tick.
///
/// `prev_open` is the damper state from the previous tick; it is returned
/// unchanged while humidity sits strictly inside the band.
pub fn damper_command(
    prev_open: bool,
    humidity: f64,
    setpoint: f64,
    hysteresis: f64,
    mode: DamperCloseMode,
) -> bool {
    let h = hysteresis.max(0.0);
    if humidity < setpoint - h {
        return true;
    }
    let close_above = match mode {
        DamperCloseMode::SymmetricBand => setpoint + h,
        DamperCloseMode::AboveSetpoint => setpoint,
    };
    if humidity > close_above {
        return false;
    }
    prev_open
}

/// Humidity outside the symmetric band on either side.
#[inline]
pub fn out_of_band(humidity: f64, setpoint: f64, hysteresis: f64) -> bool {
    let h = hysteresis.max(0.0);
    humidity < setpoint - h || humidity > setpoint + h
}

#[cfg(test)]
mod tests {
    use super::*;

    const SP: f64 = 40.0;
    const HYST: f64 = 5.0;

    #[test]
    fn opens_below_band() {
        assert!(damper_command(false, 34.0, SP, HYST, DamperCloseMode::SymmetricBand));
    }

    #[test]
    fn closes_above_band() {
        assert!(!damper_command(true, 46.0, SP, HYST, DamperCloseMode::SymmetricBand));
    }

    #[test]
    fn holds_state_inside_band() {
        for humidity in [35.5, 40.0, 44.5] {
            assert!(damper_command(true, humidity, SP, HYST, DamperCloseMode::SymmetricBand));
            assert!(!damper_command(false, humidity, SP, HYST, DamperCloseMode::SymmetricBand));
        }
    }

    #[test]
    fn band_edges_hold_state() {
        // Exactly at the thresholds there is no action in symmetric mode.
        assert!(damper_command(true, SP - HYST, SP, HYST, DamperCloseMode::SymmetricBand));
        assert!(!damper_command(false, SP + HYST, SP, HYST, DamperCloseMode::SymmetricBand));
    }

    #[test]
    fn asymmetric_variant_closes_above_setpoint() {
        // 42 % is inside the symmetric band but above the setpoint.
        assert!(damper_command(true, 42.0, SP, HYST, DamperCloseMode::SymmetricBand));
        assert!(!damper_command(true, 42.0, SP, HYST, DamperCloseMode::AboveSetpoint));
        // Below the setpoint the variant still holds.
        assert!(damper_command(true, 38.0, SP, HYST, DamperCloseMode::AboveSetpoint));
    }

    #[test]
    fn negative_hysteresis_is_clamped() {
        // Degenerate configuration must not invert the band.
        assert!(damper_command(false, 39.0, SP, -5.0, DamperCloseMode::SymmetricBand));
        assert!(!damper_command(true, 41.0, SP, -5.0, DamperCloseMode::SymmetricBand));
    }

    #[test]
    fn out_of_band_both_sides() {
        assert!(out_of_band(34.0, SP, HYST));
        assert!(out_of_band(46.0, SP, HYST));
        assert!(!out_of_band(40.0, SP, HYST));
        assert!(!out_of_band(35.0, SP, HYST));
        assert!(!out_of_band(45.0, SP, HYST));
    }
}
