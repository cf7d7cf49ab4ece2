// ABOUTME: convert subcommand: PSI/bar conversion of a single value
// ABOUTME: Prints the converted value with display rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use tire_pressure_studio::formatters::format_pressure;
use tire_pressure_studio::models::PressureUnit;

/// Convert `value` from one unit to another and print it
pub fn run(value: f64, from: PressureUnit, to: PressureUnit) {
    let converted = from.convert(value, to);
    println!(
        "{} {} = {} {}",
        format_pressure(value),
        from.label(),
        format_pressure(converted),
        to.label()
    );
}
