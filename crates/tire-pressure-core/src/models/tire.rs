// ABOUTME: Tire casing and width models with unit-aware width conversion
// ABOUTME: Defines TireConfiguration, the per-wheel tire input of the estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ride::normalize;
use crate::constants::units::MM_PER_INCH;
use crate::errors::AppError;

/// Tire sidewall construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Casing {
    /// Regular casing
    #[default]
    Standard,
    /// Supple, lightweight casing
    Thin,
    /// Reinforced sidewalls
    Reinforced,
    /// Heavy downhill casing
    DownhillCasing,
}

impl Casing {
    /// Every casing, in form order
    pub const ALL: [Self; 4] = [
        Self::Standard,
        Self::Thin,
        Self::Reinforced,
        Self::DownhillCasing,
    ];

    /// Offset added by the linear model
    #[must_use]
    pub const fn adjustment_psi(&self) -> f64 {
        match self {
            Self::Standard => 0.0,
            Self::Thin => -1.0,
            Self::Reinforced => 1.5,
            Self::DownhillCasing => 3.0,
        }
    }

    /// Multiplier applied by the load-distribution model
    #[must_use]
    pub const fn load_factor(&self) -> f64 {
        match self {
            Self::Thin => 0.92,
            Self::Standard => 1.00,
            Self::Reinforced => 1.08,
            Self::DownhillCasing => 1.15,
        }
    }

    /// Wire name used by the compute service
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Thin => "THIN",
            Self::Reinforced => "REINFORCED",
            Self::DownhillCasing => "DOWNHILL_CASING",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Standard => "Standard",
            Self::Thin => "Supple",
            Self::Reinforced => "Reinforced",
            Self::DownhillCasing => "Downhill",
        };
        f.write_str(label)
    }
}

impl FromStr for Casing {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "standard" => Ok(Self::Standard),
            "thin" | "supple" => Ok(Self::Thin),
            "reinforced" => Ok(Self::Reinforced),
            "downhill_casing" | "downhill" | "dh" => Ok(Self::DownhillCasing),
            other => Err(AppError::invalid_input(format!(
                "Unknown casing: '{other}'. Valid options: standard, supple, reinforced, downhill"
            ))
            .with_field("casing")),
        }
    }
}

/// Unit a tire width was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WidthUnit {
    /// Millimeters
    #[default]
    #[serde(rename = "MM")]
    Millimeters,
    /// Inches
    #[serde(rename = "IN")]
    Inches,
}

impl FromStr for WidthUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "mm" => Ok(Self::Millimeters),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            other => Err(AppError::invalid_input(format!(
                "Unknown width unit: '{other}'. Valid options: mm, in"
            ))),
        }
    }
}

/// A tire width with its unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TireWidth {
    /// Width value
    pub value: f64,
    /// Width unit
    pub unit: WidthUnit,
}

impl TireWidth {
    /// Width in millimeters
    #[must_use]
    pub const fn mm(value: f64) -> Self {
        Self {
            value,
            unit: WidthUnit::Millimeters,
        }
    }

    /// Width in inches
    #[must_use]
    pub const fn inches(value: f64) -> Self {
        Self {
            value,
            unit: WidthUnit::Inches,
        }
    }

    /// Convert to millimeters
    #[must_use]
    pub fn in_mm(&self) -> f64 {
        match self.unit {
            WidthUnit::Millimeters => self.value,
            WidthUnit::Inches => self.value * MM_PER_INCH,
        }
    }
}

/// Tire mounted at one wheel position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TireConfiguration {
    /// Tire width in millimeters
    pub width_mm: f64,
    /// Casing construction
    pub casing: Casing,
}

impl TireConfiguration {
    /// Create a tire configuration from a width already in millimeters
    #[must_use]
    pub const fn new(width_mm: f64, casing: Casing) -> Self {
        Self { width_mm, casing }
    }

    /// Create a tire configuration from a unit-tagged width
    #[must_use]
    pub fn from_width(width: TireWidth, casing: Casing) -> Self {
        Self::new(width.in_mm(), casing)
    }

    /// Whether the width is usable by the estimator
    #[must_use]
    pub fn has_valid_width(&self) -> bool {
        self.width_mm.is_finite() && self.width_mm > 0.0
    }
}
