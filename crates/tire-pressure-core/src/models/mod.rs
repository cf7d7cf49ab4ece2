// ABOUTME: Domain models for rider, bike, tire, rim, ride context, and pressure results
// ABOUTME: Re-exports all model types so callers can import from one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Domain models
//!
//! All entities are immutable value data. Every enum carries both its
//! wire name (the compute service's `SCREAMING_SNAKE_CASE` form) and the
//! offsets/factors the estimation models attach to it.

/// Pressure units, conversion, and the clamped estimate
pub mod pressure;
/// Discipline, surface, and ride context
pub mod ride;
/// Complete bike setup (the estimator input)
pub mod setup;
/// Casing, tire width, and tire configuration
pub mod tire;
/// Weight units and rider/bike configuration
pub mod weight;
/// Rim type, wheel diameter, wheel position, and rim configuration
pub mod wheel;

pub use pressure::{to_bar, to_psi, PressureEstimate, PressureReading, PressureUnit};
pub use ride::{Discipline, RideContext, Surface};
pub use setup::{BikeSetup, WheelSetup};
pub use tire::{Casing, TireConfiguration, TireWidth, WidthUnit};
pub use weight::{RiderBikeConfiguration, Weight, WeightUnit};
pub use wheel::{RimConfiguration, RimType, WheelDiameter, WheelPosition};
