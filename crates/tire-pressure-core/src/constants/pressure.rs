// ABOUTME: Pressure formula coefficients, per-category offsets, and output clamp bounds
// ABOUTME: Shared by the linear weighted-sum model and the load-distribution model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Pressure estimation constants
//!
//! All pressures are PSI, all weights kilograms, all widths millimeters.
//! Per-category offsets and factors live on the enums themselves
//! (`Discipline::style_adjustment_psi` and friends); this module holds the
//! scalar coefficients.

/// Canonical output bounds applied to every estimate
pub mod bounds {
    /// Lowest front pressure ever reported
    pub const FRONT_MIN_PSI: f64 = 12.0;

    /// Highest front pressure ever reported
    pub const FRONT_MAX_PSI: f64 = 75.0;

    /// Lowest rear pressure ever reported
    pub const REAR_MIN_PSI: f64 = 12.0;

    /// Highest rear pressure ever reported
    pub const REAR_MAX_PSI: f64 = 78.0;
}

/// Coefficients of the linear weighted-sum model
pub mod linear {
    /// Intercept of the base pressure line
    pub const BASE_PSI: f64 = 32.0;

    /// PSI added per kilogram of system weight (rider + bike)
    pub const PSI_PER_KG: f64 = 0.18;

    /// Tire width at which the width term vanishes
    pub const REFERENCE_TIRE_WIDTH_MM: f64 = 30.0;

    /// PSI per millimeter of front tire width below the reference
    pub const FRONT_WIDTH_COEFFICIENT: f64 = 0.22;

    /// PSI per millimeter of rear tire width below the reference
    pub const REAR_WIDTH_COEFFICIENT: f64 = 0.19;

    /// Rim inner width at which the rim-width term vanishes
    pub const REFERENCE_RIM_WIDTH_MM: f64 = 25.0;

    /// PSI per millimeter of rim inner width below the reference
    pub const RIM_WIDTH_COEFFICIENT: f64 = 0.12;

    /// Fixed extra pressure carried by the rear wheel
    pub const REAR_BIAS_PSI: f64 = 1.5;
}

/// Coefficients of the load-distribution model
pub mod load_distribution {
    /// Share of the system weight carried by the front wheel
    pub const FRONT_WEIGHT_RATIO: f64 = 0.485;

    /// Rear/front ratio for road and cyclocross
    pub const ROAD_REAR_RATIO: f64 = 1.063;

    /// Rear/front ratio for gravel
    pub const GRAVEL_REAR_RATIO: f64 = 1.064;

    /// Rear/front ratio for mountain bike disciplines
    pub const MTB_REAR_RATIO: f64 = 1.065;

    /// Maximum pressure on hookless rims (5 bar)
    pub const HOOKLESS_MAX_PSI: f64 = 73.0;

    /// Road and cyclocross tire width curve: (upper width mm, factor)
    pub const ROAD_WIDTH_CURVE: &[(f64, f64)] = &[
        (23.0, 1.25),
        (25.0, 1.15),
        (28.0, 1.00),
        (32.0, 0.88),
        (35.0, 0.78),
        (f64::INFINITY, 0.70),
    ];

    /// Gravel tire width curve: (upper width mm, factor)
    pub const GRAVEL_WIDTH_CURVE: &[(f64, f64)] = &[
        (32.0, 1.10),
        (35.0, 1.00),
        (40.0, 0.90),
        (45.0, 0.82),
        (f64::INFINITY, 0.75),
    ];

    /// Mountain bike tire width curve: (upper width mm, factor)
    pub const MTB_WIDTH_CURVE: &[(f64, f64)] = &[
        (58.0, 1.00),
        (64.0, 0.92),
        (70.0, 0.85),
        (f64::INFINITY, 0.80),
    ];

    /// Rim inner width steps: (upper width mm, factor); wider rims need less pressure
    pub const RIM_WIDTH_STEPS: &[(f64, f64)] = &[
        (17.0, 1.05),
        (21.0, 1.00),
        (25.0, 0.97),
        (30.0, 0.94),
        (f64::INFINITY, 0.92),
    ];
}
