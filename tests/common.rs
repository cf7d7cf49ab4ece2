// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Builders for reference bike setups used across estimator and client tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

#![allow(dead_code)]

use tire_pressure_studio::models::{
    BikeSetup, Casing, Discipline, RideContext, RiderBikeConfiguration, RimConfiguration,
    RimType, Surface, TireConfiguration, WheelSetup,
};

/// Floating-point tolerance for exact-formula comparisons
pub const EPSILON: f64 = 1e-9;

/// Wheel with a given tire width and rim
pub fn wheel(width_mm: f64, casing: Casing, rim_type: RimType, rim_width_mm: f64) -> WheelSetup {
    WheelSetup::new(
        TireConfiguration::new(width_mm, casing),
        RimConfiguration::new(rim_type, rim_width_mm),
    )
}

/// 72 kg rider, 8.5 kg bike, 28/30 mm standard tires on 23 mm hookless rims, road, dry
pub fn reference_road_setup() -> BikeSetup {
    BikeSetup::new(
        RiderBikeConfiguration::new(72.0, 8.5),
        wheel(28.0, Casing::Standard, RimType::Hookless, 23.0),
        wheel(30.0, Casing::Standard, RimType::Hookless, 23.0),
        RideContext::new(Discipline::Road, Surface::Dry),
    )
}

/// Same wheels front and rear with a custom rider, discipline, and surface
pub fn setup_with(
    rider_kg: f64,
    bike_kg: f64,
    width_mm: f64,
    discipline: Discipline,
    surface: Surface,
) -> BikeSetup {
    BikeSetup::new(
        RiderBikeConfiguration::new(rider_kg, bike_kg),
        wheel(width_mm, Casing::Standard, RimType::Hooked, 25.0),
        wheel(width_mm, Casing::Standard, RimType::Hooked, 25.0),
        RideContext::new(discipline, surface),
    )
}
