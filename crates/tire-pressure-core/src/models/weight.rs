// ABOUTME: Weight models with kilogram/pound normalization
// ABOUTME: Defines RiderBikeConfiguration, the system-weight input of the estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::units::KG_PER_LB;
use crate::errors::AppError;

/// Unit a weight was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kg => f.write_str("kg"),
            Self::Lbs => f.write_str("lbs"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(Self::Kg),
            "lb" | "lbs" | "pounds" => Ok(Self::Lbs),
            other => Err(AppError::invalid_input(format!(
                "Unknown mass unit: '{other}'. Valid options: kg, lbs"
            ))
            .with_field("mass_unit")),
        }
    }
}

/// A weight with its unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    /// Weight value
    pub value: f64,
    /// Weight unit
    pub unit: WeightUnit,
}

impl Weight {
    /// Create a weight
    #[must_use]
    pub const fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn kg(value: f64) -> Self {
        Self::new(value, WeightUnit::Kg)
    }

    /// Weight in pounds
    #[must_use]
    pub const fn lbs(value: f64) -> Self {
        Self::new(value, WeightUnit::Lbs)
    }

    /// Convert to kilograms
    #[must_use]
    pub fn in_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Kg => self.value,
            WeightUnit::Lbs => self.value * KG_PER_LB,
        }
    }
}

/// Rider and bike weight, normalized to kilograms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiderBikeConfiguration {
    /// Rider weight in kilograms
    pub rider_weight_kg: f64,
    /// Bike weight in kilograms
    pub bike_weight_kg: f64,
}

impl RiderBikeConfiguration {
    /// Create a configuration from weights already in kilograms
    #[must_use]
    pub const fn new(rider_weight_kg: f64, bike_weight_kg: f64) -> Self {
        Self {
            rider_weight_kg,
            bike_weight_kg,
        }
    }

    /// Create a configuration from unit-tagged weights
    #[must_use]
    pub fn from_weights(rider: Weight, bike: Weight) -> Self {
        Self::new(rider.in_kg(), bike.in_kg())
    }

    /// Rider plus bike, in kilograms
    #[must_use]
    pub fn total_weight_kg(&self) -> f64 {
        self.rider_weight_kg + self.bike_weight_kg
    }

    /// Whether the weights are usable by the estimator
    ///
    /// Rider weight must be positive; bike weight may be zero but not negative.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rider_weight_kg.is_finite()
            && self.rider_weight_kg > 0.0
            && self.bike_weight_kg.is_finite()
            && self.bike_weight_kg >= 0.0
    }
}
