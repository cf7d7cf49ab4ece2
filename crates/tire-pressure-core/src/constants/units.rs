// ABOUTME: Unit conversion constants for pressure, mass, and length
// ABOUTME: Provides named constants to eliminate magic numbers in conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

/// Pounds per square inch in one bar
pub const PSI_PER_BAR: f64 = 14.5038;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;
