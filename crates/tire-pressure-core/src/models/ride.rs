// ABOUTME: Riding discipline and surface enumerations with their pressure offsets
// ABOUTME: Defines RideContext and parsing/display implementations for CLI and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::pressure::load_distribution::{
    GRAVEL_REAR_RATIO, GRAVEL_WIDTH_CURVE, MTB_REAR_RATIO, MTB_WIDTH_CURVE, ROAD_REAR_RATIO,
    ROAD_WIDTH_CURVE,
};
use crate::errors::AppError;

/// Riding category driving a fixed pressure offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Discipline {
    /// Paved road riding
    Road,
    /// Unpaved roads and light trails on drop-bar bikes
    Gravel,
    /// Cyclocross racing
    Cyclocross,
    /// Trail mountain biking
    MtbTrail,
    /// Enduro mountain biking
    MtbEnduro,
    /// Downhill mountain biking
    MtbDownhill,
}

impl Discipline {
    /// Every discipline, in form order
    pub const ALL: [Self; 6] = [
        Self::Road,
        Self::Gravel,
        Self::Cyclocross,
        Self::MtbTrail,
        Self::MtbEnduro,
        Self::MtbDownhill,
    ];

    /// Offset added by the linear model
    #[must_use]
    pub const fn style_adjustment_psi(&self) -> f64 {
        match self {
            Self::Road => 6.0,
            Self::Gravel => -2.0,
            Self::Cyclocross => -4.0,
            Self::MtbTrail => -10.0,
            Self::MtbEnduro => -11.0,
            Self::MtbDownhill => -14.0,
        }
    }

    /// PSI per kilogram of wheel load in the load-distribution model
    #[must_use]
    pub const fn base_factor(&self) -> f64 {
        match self {
            Self::Road => 1.76,
            Self::Cyclocross => 1.6,
            Self::Gravel => 1.1,
            Self::MtbTrail => 0.55,
            Self::MtbEnduro => 0.45,
            Self::MtbDownhill => 0.35,
        }
    }

    /// Lowest pressure the load-distribution model will recommend
    #[must_use]
    pub const fn min_pressure_psi(&self) -> f64 {
        match self {
            Self::Road => 20.0,
            Self::Cyclocross => 18.0,
            Self::Gravel => 15.0,
            Self::MtbTrail => 10.0,
            Self::MtbEnduro => 8.0,
            Self::MtbDownhill => 6.0,
        }
    }

    /// Rear pressure as a multiple of front pressure in the load-distribution model
    #[must_use]
    pub const fn rear_ratio(&self) -> f64 {
        match self {
            Self::Road | Self::Cyclocross => ROAD_REAR_RATIO,
            Self::Gravel => GRAVEL_REAR_RATIO,
            Self::MtbTrail | Self::MtbEnduro | Self::MtbDownhill => MTB_REAR_RATIO,
        }
    }

    /// Tire width curve used by the load-distribution model
    #[must_use]
    pub const fn width_curve(&self) -> &'static [(f64, f64)] {
        match self {
            Self::Road | Self::Cyclocross => ROAD_WIDTH_CURVE,
            Self::Gravel => GRAVEL_WIDTH_CURVE,
            Self::MtbTrail | Self::MtbEnduro | Self::MtbDownhill => MTB_WIDTH_CURVE,
        }
    }

    /// Whether this is a drop-bar discipline (road or cyclocross)
    #[must_use]
    pub const fn is_road_like(&self) -> bool {
        matches!(self, Self::Road | Self::Cyclocross)
    }

    /// Wire name used by the compute service
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "ROAD",
            Self::Gravel => "GRAVEL",
            Self::Cyclocross => "CYCLOCROSS",
            Self::MtbTrail => "MTB_TRAIL",
            Self::MtbEnduro => "MTB_ENDURO",
            Self::MtbDownhill => "MTB_DOWNHILL",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Road => "Road",
            Self::Gravel => "Gravel",
            Self::Cyclocross => "Cyclocross",
            Self::MtbTrail => "Trail",
            Self::MtbEnduro => "Enduro",
            Self::MtbDownhill => "Downhill",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Discipline {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "road" => Ok(Self::Road),
            "gravel" => Ok(Self::Gravel),
            "cyclocross" | "cx" => Ok(Self::Cyclocross),
            "mtb_trail" | "trail" => Ok(Self::MtbTrail),
            "mtb_enduro" | "enduro" => Ok(Self::MtbEnduro),
            "mtb_downhill" | "downhill" | "dh" => Ok(Self::MtbDownhill),
            other => Err(AppError::invalid_input(format!(
                "Unknown discipline: '{other}'. Valid options: road, gravel, cyclocross, trail, enduro, downhill"
            ))
            .with_field("discipline")),
        }
    }
}

/// Riding surface condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Surface {
    /// Dry surface
    #[default]
    Dry,
    /// Wet surface
    Wet,
    /// Mixed conditions
    Mixed,
    /// Snow
    Snow,
}

impl Surface {
    /// Every surface, in form order
    pub const ALL: [Self; 4] = [Self::Dry, Self::Wet, Self::Mixed, Self::Snow];

    /// Offset added by the linear model
    #[must_use]
    pub const fn surface_adjustment_psi(&self) -> f64 {
        match self {
            Self::Dry => 0.0,
            Self::Wet => -3.0,
            Self::Mixed => -1.5,
            Self::Snow => -4.0,
        }
    }

    /// Multiplier applied by the load-distribution model
    ///
    /// Drop-bar disciplines only soften for wet roads; snow has no dedicated factor.
    #[must_use]
    pub const fn load_factor(&self, discipline: Discipline) -> f64 {
        match (self, discipline.is_road_like()) {
            (Self::Wet, _) => 0.90,
            (Self::Mixed, false) => 0.95,
            _ => 1.00,
        }
    }

    /// Wire name used by the compute service
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dry => "DRY",
            Self::Wet => "WET",
            Self::Mixed => "MIXED",
            Self::Snow => "SNOW",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dry => "Dry",
            Self::Wet => "Wet",
            Self::Mixed => "Mixed",
            Self::Snow => "Snow",
        };
        f.write_str(label)
    }
}

impl FromStr for Surface {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "dry" => Ok(Self::Dry),
            "wet" => Ok(Self::Wet),
            "mixed" => Ok(Self::Mixed),
            "snow" => Ok(Self::Snow),
            other => Err(AppError::invalid_input(format!(
                "Unknown surface: '{other}'. Valid options: dry, wet, mixed, snow"
            ))
            .with_field("surface")),
        }
    }
}

/// Where and how the bike is ridden
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RideContext {
    /// Riding discipline
    pub discipline: Discipline,
    /// Surface condition
    pub surface: Surface,
}

impl RideContext {
    /// Create a ride context
    #[must_use]
    pub const fn new(discipline: Discipline, surface: Surface) -> Self {
        Self {
            discipline,
            surface,
        }
    }
}

/// Lowercase and unify separators so `MTB-Trail`, `mtb_trail` and `MTB TRAIL` match
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}
