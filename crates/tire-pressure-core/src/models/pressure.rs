// ABOUTME: Pressure units, PSI/BAR conversion, and the clamped front/rear estimate
// ABOUTME: PressureReading mirrors the compute service response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::pressure::bounds::{
    FRONT_MAX_PSI, FRONT_MIN_PSI, REAR_MAX_PSI, REAR_MIN_PSI,
};
use crate::constants::units::PSI_PER_BAR;
use crate::errors::AppError;

/// Convert PSI to bar
///
/// No rounding is applied; display rounding belongs to the formatters.
#[must_use]
pub fn to_bar(psi: f64) -> f64 {
    psi / PSI_PER_BAR
}

/// Convert bar to PSI
#[must_use]
pub fn to_psi(bar: f64) -> f64 {
    bar * PSI_PER_BAR
}

/// Pressure unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PressureUnit {
    /// Pounds per square inch (canonical)
    #[default]
    Psi,
    /// Bar
    Bar,
}

impl PressureUnit {
    /// Convert `value` expressed in `self` into `target`
    #[must_use]
    pub fn convert(self, value: f64, target: Self) -> f64 {
        match (self, target) {
            (Self::Psi, Self::Bar) => to_bar(value),
            (Self::Bar, Self::Psi) => to_psi(value),
            _ => value,
        }
    }

    /// Short lowercase label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Psi => "psi",
            Self::Bar => "bar",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PressureUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "psi" => Ok(Self::Psi),
            "bar" => Ok(Self::Bar),
            other => Err(AppError::invalid_input(format!(
                "Unknown pressure unit: '{other}'. Valid options: psi, bar"
            ))
            .with_field("unit")),
        }
    }
}

/// Recommended front and rear pressure in PSI
///
/// Values are always inside the canonical bounds: front in `[12, 75]`,
/// rear in `[12, 78]`. The only way to build one is through [`Self::clamped`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PressureEstimate {
    front_psi: f64,
    rear_psi: f64,
}

impl PressureEstimate {
    /// Clamp raw front/rear values into the canonical bounds
    ///
    /// NaN inputs collapse to the lower bound so the invariant holds for any input.
    #[must_use]
    pub fn clamped(front_psi: f64, rear_psi: f64) -> Self {
        Self {
            front_psi: clamp_or_min(front_psi, FRONT_MIN_PSI, FRONT_MAX_PSI),
            rear_psi: clamp_or_min(rear_psi, REAR_MIN_PSI, REAR_MAX_PSI),
        }
    }

    /// Normalize a service reading into PSI and clamp it
    #[must_use]
    pub fn from_reading(reading: &PressureReading) -> Self {
        let front = reading.unit.convert(reading.front_wheel, PressureUnit::Psi);
        let rear = reading.unit.convert(reading.rear_wheel, PressureUnit::Psi);
        Self::clamped(front, rear)
    }

    /// Front pressure in PSI
    #[must_use]
    pub const fn front_psi(&self) -> f64 {
        self.front_psi
    }

    /// Rear pressure in PSI
    #[must_use]
    pub const fn rear_psi(&self) -> f64 {
        self.rear_psi
    }

    /// Front pressure in bar
    #[must_use]
    pub fn front_bar(&self) -> f64 {
        to_bar(self.front_psi)
    }

    /// Rear pressure in bar
    #[must_use]
    pub fn rear_bar(&self) -> f64 {
        to_bar(self.rear_psi)
    }

    /// Express the estimate in a display unit
    #[must_use]
    pub fn in_unit(&self, unit: PressureUnit) -> PressureReading {
        PressureReading {
            front_wheel: PressureUnit::Psi.convert(self.front_psi, unit),
            rear_wheel: PressureUnit::Psi.convert(self.rear_psi, unit),
            unit,
        }
    }
}

/// Front/rear pressure in an explicit unit, as exchanged with the compute service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PressureReading {
    /// Front wheel pressure
    pub front_wheel: f64,
    /// Rear wheel pressure
    pub rear_wheel: f64,
    /// Unit of both values
    pub unit: PressureUnit,
}

impl PressureReading {
    /// Re-express the reading in another unit
    #[must_use]
    pub fn to_unit(&self, unit: PressureUnit) -> Self {
        Self {
            front_wheel: self.unit.convert(self.front_wheel, unit),
            rear_wheel: self.unit.convert(self.rear_wheel, unit),
            unit,
        }
    }
}

fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
