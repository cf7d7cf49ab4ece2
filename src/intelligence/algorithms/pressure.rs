// ABOUTME: Tire pressure estimation algorithms: linear weighted sum and load distribution
// ABOUTME: Enum dispatch over formulas producing raw (unclamped) front/rear PSI values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tire_pressure_core::constants::pressure::linear::{
    BASE_PSI, FRONT_WIDTH_COEFFICIENT, PSI_PER_KG, REAR_BIAS_PSI, REAR_WIDTH_COEFFICIENT,
    REFERENCE_RIM_WIDTH_MM, REFERENCE_TIRE_WIDTH_MM, RIM_WIDTH_COEFFICIENT,
};
use tire_pressure_core::constants::pressure::load_distribution::{
    FRONT_WEIGHT_RATIO, HOOKLESS_MAX_PSI, RIM_WIDTH_STEPS,
};
use tire_pressure_core::models::{BikeSetup, RimType, WheelSetup};

/// Raw front/rear pressure in PSI before the canonical clamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPressure {
    /// Front pressure in PSI
    pub front_psi: f64,
    /// Rear pressure in PSI
    pub rear_psi: f64,
}

/// Pressure estimation algorithm
///
/// - `Linear`: additive offsets on a weight-driven base line. Every input
///   contributes an independent term, so changing one input shifts the result
///   by exactly that input's offset.
/// - `LoadDistribution`: splits system weight between the wheels and scales
///   each wheel load by multiplicative factors for width, casing, surface and
///   rim. The rear wheel follows the front by a discipline-specific ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PressureAlgorithm {
    /// Weighted sum: `32 + 0.18 x total_kg + width, style, surface, rim, casing offsets`
    #[default]
    Linear,

    /// Proportional model: `wheel_load x base_factor x width x casing x surface x rim`
    LoadDistribution,
}

impl PressureAlgorithm {
    /// Compute raw front/rear pressure for a ready setup
    ///
    /// `rim_width_adjustment` enables the rim inner-width term of either model.
    /// Callers check [`BikeSetup::is_ready`] first; this function does not.
    #[must_use]
    pub fn calculate(&self, setup: &BikeSetup, rim_width_adjustment: bool) -> RawPressure {
        match self {
            Self::Linear => Self::calculate_linear(setup, rim_width_adjustment),
            Self::LoadDistribution => {
                Self::calculate_load_distribution(setup, rim_width_adjustment)
            }
        }
    }

    /// Additive model
    #[allow(clippy::suboptimal_flops)] // Term order is part of the reference output; mul_add rounds differently
    fn calculate_linear(setup: &BikeSetup, rim_width_adjustment: bool) -> RawPressure {
        let base = BASE_PSI + setup.rider.total_weight_kg() * PSI_PER_KG;
        let style = setup.context.discipline.style_adjustment_psi();
        let surface = setup.context.surface.surface_adjustment_psi();

        let wheel_terms = |wheel: &WheelSetup, width_coefficient: f64| {
            let rim_width = if rim_width_adjustment {
                linear_rim_width_adjustment(wheel.rim.inner_width_mm)
            } else {
                0.0
            };
            base + width_delta(wheel.tire.width_mm) * width_coefficient
                + style
                + surface
                + wheel.rim.rim_type.adjustment_psi()
                + rim_width
                + wheel.tire.casing.adjustment_psi()
        };

        RawPressure {
            front_psi: wheel_terms(&setup.front, FRONT_WIDTH_COEFFICIENT),
            rear_psi: wheel_terms(&setup.rear, REAR_WIDTH_COEFFICIENT) + REAR_BIAS_PSI,
        }
    }

    /// Multiplicative model
    ///
    /// The rear is derived from the front pressure, so rear casing and rim
    /// type only matter through the hookless cap.
    fn calculate_load_distribution(setup: &BikeSetup, rim_width_adjustment: bool) -> RawPressure {
        let discipline = setup.context.discipline;
        let front_load = setup.rider.total_weight_kg() * FRONT_WEIGHT_RATIO;
        let rim_width_factor = if rim_width_adjustment {
            step_rim_width_factor(setup.front.rim.inner_width_mm)
        } else {
            1.0
        };

        let front = front_load
            * discipline.base_factor()
            * interpolate_width_factor(setup.front.tire.width_mm, discipline.width_curve())
            * setup.front.tire.casing.load_factor()
            * setup.context.surface.load_factor(discipline)
            * setup.front.rim.rim_type.load_factor()
            * rim_width_factor;
        let rear = front * discipline.rear_ratio();

        let floor = discipline.min_pressure_psi();
        RawPressure {
            front_psi: hookless_cap(front, setup.front.rim.rim_type).max(floor),
            rear_psi: hookless_cap(rear, setup.rear.rim.rim_type).max(floor),
        }
    }

    /// Algorithm name for logging and configuration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LoadDistribution => "load_distribution",
        }
    }

    /// Algorithm description with formula
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Linear => "Linear: 32 + 0.18 x weight + width/style/surface/rim/casing offsets",
            Self::LoadDistribution => {
                "Load distribution: wheel load x discipline factor x width/casing/surface/rim factors"
            }
        }
    }
}

impl FromStr for PressureAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(Self::Linear),
            "load_distribution" | "load" => Ok(Self::LoadDistribution),
            other => Err(AppError::invalid_input(format!(
                "Unknown pressure algorithm: '{other}'. Valid options: linear, load_distribution"
            ))
            .with_field("algorithm")),
        }
    }
}

/// Millimeters below the reference tire width (negative for wider tires)
fn width_delta(tire_width_mm: f64) -> f64 {
    REFERENCE_TIRE_WIDTH_MM - tire_width_mm
}

/// Linear rim-width term: narrower rims need more pressure
fn linear_rim_width_adjustment(inner_width_mm: f64) -> f64 {
    (REFERENCE_RIM_WIDTH_MM - inner_width_mm) * RIM_WIDTH_COEFFICIENT
}

/// Piecewise-linear interpolation over a `(upper width, factor)` curve
///
/// Widths at or below the first point take its factor. The final point sits at
/// infinity, so widths past the last finite point keep that point's factor.
#[must_use]
pub fn interpolate_width_factor(width_mm: f64, curve: &[(f64, f64)]) -> f64 {
    let mut previous: Option<(f64, f64)> = None;
    for &(limit, factor) in curve {
        if width_mm <= limit {
            return previous.map_or(factor, |(prev_limit, prev_factor)| {
                let ratio = (width_mm - prev_limit) / (limit - prev_limit);
                (factor - prev_factor).mul_add(ratio, prev_factor)
            });
        }
        previous = Some((limit, factor));
    }
    curve.last().map_or(1.0, |&(_, factor)| factor)
}

/// Step factor for rim inner width in the load-distribution model
fn step_rim_width_factor(inner_width_mm: f64) -> f64 {
    RIM_WIDTH_STEPS
        .iter()
        .find(|(limit, _)| inner_width_mm <= *limit)
        .map_or(1.0, |&(_, factor)| factor)
}

fn hookless_cap(pressure_psi: f64, rim_type: RimType) -> f64 {
    if rim_type == RimType::Hookless {
        pressure_psi.min(HOOKLESS_MAX_PSI)
    } else {
        pressure_psi
    }
}
