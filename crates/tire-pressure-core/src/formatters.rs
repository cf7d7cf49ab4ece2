// ABOUTME: Display formatting for pressure values and readings
// ABOUTME: Applies the one-decimal display rounding that the estimator deliberately omits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use crate::models::PressureReading;

/// Format a pressure for display
///
/// Values are rounded to one decimal first; a result that lands on a whole
/// number prints without decimals.
#[must_use]
pub fn format_pressure(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// Two-line human-readable rendering of a reading
#[must_use]
pub fn format_reading(reading: &PressureReading) -> String {
    let unit = reading.unit.label();
    format!(
        "Front: {} {unit}\nRear:  {} {unit}",
        format_pressure(reading.front_wheel),
        format_pressure(reading.rear_wheel),
    )
}
