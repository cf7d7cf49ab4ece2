// ABOUTME: Pressure estimator facade with configurable optional terms and readiness checks
// ABOUTME: Defines the PressureSource trait shared by local and remote estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Local pressure estimation
//!
//! `PressureEstimator` is a pure function object: no state beyond its options,
//! no history, full recomputation on every call. An incomplete setup yields
//! `None` so callers can tell "not ready" apart from a result.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::algorithms::PressureAlgorithm;
use crate::errors::AppResult;
use crate::models::{
    BikeSetup, PressureEstimate, RideContext, RiderBikeConfiguration, RimConfiguration,
    TireConfiguration, WheelSetup,
};

/// Optional modifiers of the estimation formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EstimatorOptions {
    /// Include the rim inner-width term
    pub rim_width_adjustment: bool,
    /// Formula to evaluate
    pub algorithm: PressureAlgorithm,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            rim_width_adjustment: true,
            algorithm: PressureAlgorithm::Linear,
        }
    }
}

impl EstimatorOptions {
    /// Options without the rim inner-width term
    #[must_use]
    pub fn without_rim_width() -> Self {
        Self {
            rim_width_adjustment: false,
            ..Self::default()
        }
    }

    /// Replace the algorithm
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: PressureAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Deterministic front/rear pressure estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureEstimator {
    options: EstimatorOptions,
}

impl PressureEstimator {
    /// Create an estimator with explicit options
    #[must_use]
    pub const fn new(options: EstimatorOptions) -> Self {
        Self { options }
    }

    /// Options this estimator evaluates with
    #[must_use]
    pub const fn options(&self) -> &EstimatorOptions {
        &self.options
    }

    /// Estimate front and rear pressure from the individual setup parts
    ///
    /// Returns `None` when rider weight or either tire width is missing
    /// (non-positive or non-finite), or when the rim-width term is enabled and a
    /// rim width is missing. Out-of-range results are clamped, never rejected.
    #[must_use]
    pub fn estimate(
        &self,
        rider: &RiderBikeConfiguration,
        front_tire: &TireConfiguration,
        rear_tire: &TireConfiguration,
        front_rim: &RimConfiguration,
        rear_rim: &RimConfiguration,
        context: &RideContext,
    ) -> Option<PressureEstimate> {
        let setup = BikeSetup::new(
            *rider,
            WheelSetup::new(*front_tire, *front_rim),
            WheelSetup::new(*rear_tire, *rear_rim),
            *context,
        );
        self.estimate_setup(&setup)
    }

    /// Estimate front and rear pressure for a complete setup
    #[must_use]
    pub fn estimate_setup(&self, setup: &BikeSetup) -> Option<PressureEstimate> {
        if !setup.is_ready() {
            trace!("Setup incomplete, no estimate");
            return None;
        }
        if self.options.rim_width_adjustment && !setup.has_rim_widths() {
            trace!("Rim width term enabled but rim width missing, no estimate");
            return None;
        }

        let raw = self
            .options
            .algorithm
            .calculate(setup, self.options.rim_width_adjustment);
        let estimate = PressureEstimate::clamped(raw.front_psi, raw.rear_psi);

        debug!(
            algorithm = self.options.algorithm.name(),
            discipline = setup.context.discipline.as_str(),
            raw_front_psi = raw.front_psi,
            raw_rear_psi = raw.rear_psi,
            front_psi = estimate.front_psi(),
            rear_psi = estimate.rear_psi(),
            "Pressure estimated"
        );

        Some(estimate)
    }
}

/// Anything that can turn a setup into a pressure estimate
///
/// `Ok(None)` means the setup is not ready; `Err` means the source failed
/// and no partial result exists.
#[async_trait]
pub trait PressureSource: Send + Sync {
    /// Short source name for logging
    fn name(&self) -> &'static str;

    /// Estimate pressure for a setup
    ///
    /// # Errors
    ///
    /// Returns an error only for sources that depend on external services.
    async fn estimate(&self, setup: &BikeSetup) -> AppResult<Option<PressureEstimate>>;
}

#[async_trait]
impl PressureSource for PressureEstimator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn estimate(&self, setup: &BikeSetup) -> AppResult<Option<PressureEstimate>> {
        Ok(self.estimate_setup(setup))
    }
}
