// ABOUTME: Rim type, wheel diameter, and wheel position models
// ABOUTME: Defines RimConfiguration, the per-wheel rim input of the estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ride::normalize;
use crate::constants::pressure::linear::REFERENCE_RIM_WIDTH_MM;
use crate::errors::AppError;

/// Bead/mounting interface of the rim
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RimType {
    /// Hookless tubeless rim
    #[default]
    Hookless,
    /// Hooked rim
    #[serde(alias = "HOOKS")]
    Hooked,
    /// Tubular rim
    Tubular,
    /// Clincher with inner tubes
    Tubes,
}

impl RimType {
    /// Every rim type, in form order
    pub const ALL: [Self; 4] = [Self::Hookless, Self::Hooked, Self::Tubular, Self::Tubes];

    /// Offset added by the linear model
    #[must_use]
    pub const fn adjustment_psi(&self) -> f64 {
        match self {
            Self::Hookless => -1.0,
            Self::Hooked => 0.0,
            Self::Tubular => -4.0,
            Self::Tubes => 1.0,
        }
    }

    /// Multiplier applied by the load-distribution model
    #[must_use]
    pub const fn load_factor(&self) -> f64 {
        match self {
            Self::Hookless => 0.95,
            Self::Hooked => 1.00,
            Self::Tubular => 1.03,
            Self::Tubes => 0.98,
        }
    }

    /// Wire name used by the compute service
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hookless => "HOOKLESS",
            Self::Hooked => "HOOKED",
            Self::Tubular => "TUBULAR",
            Self::Tubes => "TUBES",
        }
    }
}

impl fmt::Display for RimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hookless => "Hookless",
            Self::Hooked => "Hooked",
            Self::Tubular => "Tubular",
            Self::Tubes => "Clincher",
        };
        f.write_str(label)
    }
}

impl FromStr for RimType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "hookless" => Ok(Self::Hookless),
            "hooked" | "hooks" => Ok(Self::Hooked),
            "tubular" => Ok(Self::Tubular),
            "tubes" | "tube" | "clincher" => Ok(Self::Tubes),
            other => Err(AppError::invalid_input(format!(
                "Unknown rim type: '{other}'. Valid options: hookless, hooked, tubular, clincher"
            ))
            .with_field("rim_type")),
        }
    }
}

/// Rim at one wheel position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RimConfiguration {
    /// Bead interface
    pub rim_type: RimType,
    /// Internal rim width in millimeters
    pub inner_width_mm: f64,
}

impl RimConfiguration {
    /// Inner width at which the linear rim-width term is zero
    pub const REFERENCE_WIDTH_MM: f64 = REFERENCE_RIM_WIDTH_MM;

    /// Create a rim configuration
    #[must_use]
    pub const fn new(rim_type: RimType, inner_width_mm: f64) -> Self {
        Self {
            rim_type,
            inner_width_mm,
        }
    }

    /// Rim of the given type at the reference width, which contributes no width adjustment
    #[must_use]
    pub const fn reference(rim_type: RimType) -> Self {
        Self::new(rim_type, Self::REFERENCE_WIDTH_MM)
    }
}

/// Wheel position on the bike
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WheelPosition {
    /// Front wheel
    Front,
    /// Rear wheel
    Rear,
}

/// Nominal wheel diameter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum WheelDiameter {
    /// 650c road wheel
    #[serde(rename = "650C")]
    D650C,
    /// 650b / 27.5" gravel wheel
    #[serde(rename = "650B")]
    D650B,
    /// 700c road wheel
    #[default]
    #[serde(rename = "700C")]
    D700C,
    /// 26" mountain bike wheel
    #[serde(rename = "26")]
    D26,
    /// 27.5" mountain bike wheel
    #[serde(rename = "27.5")]
    D27_5,
    /// 29" mountain bike wheel
    #[serde(rename = "29")]
    D29,
}

impl WheelDiameter {
    /// Wire name used by the compute service
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::D650C => "650C",
            Self::D650B => "650B",
            Self::D700C => "700C",
            Self::D26 => "26",
            Self::D27_5 => "27.5",
            Self::D29 => "29",
        }
    }
}

impl fmt::Display for WheelDiameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WheelDiameter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().trim_end_matches('"') {
            "650C" => Ok(Self::D650C),
            "650B" => Ok(Self::D650B),
            "700C" => Ok(Self::D700C),
            "26" => Ok(Self::D26),
            "27.5" => Ok(Self::D27_5),
            "29" => Ok(Self::D29),
            other => Err(AppError::invalid_input(format!(
                "Unknown wheel diameter: '{other}'. Valid options: 650c, 650b, 700c, 26, 27.5, 29"
            ))
            .with_field("diameter")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hooks_alias_deserializes_to_hooked() {
        let rim: Option<RimType> = serde_json::from_str("\"HOOKS\"").ok();
        assert_eq!(rim, Some(RimType::Hooked));
    }

    #[test]
    fn test_clincher_parses_as_tubes() {
        assert_eq!("Clincher".parse::<RimType>().ok(), Some(RimType::Tubes));
        assert_eq!(RimType::Tubes.to_string(), "Clincher");
    }

    #[test]
    fn test_diameter_wire_names() {
        assert_eq!("27.5".parse::<WheelDiameter>().ok(), Some(WheelDiameter::D27_5));
        assert_eq!("700c".parse::<WheelDiameter>().ok(), Some(WheelDiameter::D700C));
        let json = serde_json::to_value(WheelDiameter::D650B).ok();
        assert_eq!(json, Some(serde_json::Value::from("650B")));
    }
}
