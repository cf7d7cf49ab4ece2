// ABOUTME: Intelligence module for tire pressure estimation
// ABOUTME: Hosts the estimation algorithms and the estimator facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! # Intelligence Module
//!
//! Pressure estimation: pluggable formulas in [`algorithms`] and the
//! readiness-checking, clamping facade in [`estimator`].

/// Pluggable pressure formulas
pub mod algorithms;
/// Estimator facade and the `PressureSource` trait
pub mod estimator;

pub use algorithms::PressureAlgorithm;
pub use estimator::{EstimatorOptions, PressureEstimator, PressureSource};
