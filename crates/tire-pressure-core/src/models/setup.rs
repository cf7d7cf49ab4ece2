// ABOUTME: Complete bike setup bundling rider weight, per-wheel tire and rim, and ride context
// ABOUTME: Single input value shared by the local estimator and the remote compute client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use serde::{Deserialize, Serialize};

use super::ride::RideContext;
use super::tire::TireConfiguration;
use super::weight::RiderBikeConfiguration;
use super::wheel::{RimConfiguration, WheelDiameter};

/// Tire and rim at one wheel position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WheelSetup {
    /// Mounted tire
    pub tire: TireConfiguration,
    /// Rim the tire is mounted on
    pub rim: RimConfiguration,
}

impl WheelSetup {
    /// Create a wheel setup
    #[must_use]
    pub const fn new(tire: TireConfiguration, rim: RimConfiguration) -> Self {
        Self { tire, rim }
    }
}

/// Everything needed to estimate front and rear pressure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BikeSetup {
    /// Rider and bike weight
    pub rider: RiderBikeConfiguration,
    /// Front wheel
    pub front: WheelSetup,
    /// Rear wheel
    pub rear: WheelSetup,
    /// Discipline and surface
    pub context: RideContext,
    /// Wheel size, forwarded to the compute service only
    #[serde(default)]
    pub diameter: WheelDiameter,
}

impl BikeSetup {
    /// Create a setup with the default wheel diameter
    #[must_use]
    pub fn new(
        rider: RiderBikeConfiguration,
        front: WheelSetup,
        rear: WheelSetup,
        context: RideContext,
    ) -> Self {
        Self {
            rider,
            front,
            rear,
            context,
            diameter: WheelDiameter::default(),
        }
    }

    /// Replace the wheel diameter
    #[must_use]
    pub const fn with_diameter(mut self, diameter: WheelDiameter) -> Self {
        self.diameter = diameter;
        self
    }

    /// Whether weights and both tire widths are present and positive
    ///
    /// An incomplete setup yields no estimate rather than an error.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.rider.is_complete()
            && self.front.tire.has_valid_width()
            && self.rear.tire.has_valid_width()
    }

    /// Whether both rim inner widths are present and positive
    #[must_use]
    pub fn has_rim_widths(&self) -> bool {
        [self.front.rim.inner_width_mm, self.rear.rim.inner_width_mm]
            .iter()
            .all(|width| width.is_finite() && *width > 0.0)
    }
}
