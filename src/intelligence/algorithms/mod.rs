// ABOUTME: Algorithm abstraction layer enabling pluggable tire pressure formulas
// ABOUTME: Provides enum-based dispatch between the linear and load-distribution models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Algorithm Selection Module
//!
//! Each formula is a `PressureAlgorithm` variant; `calculate` returns raw
//! front/rear PSI and leaves clamping to the estimator.
//!
//! # Example
//!
//! ```rust,ignore
//! use tire_pressure_studio::intelligence::algorithms::PressureAlgorithm;
//!
//! let raw = PressureAlgorithm::Linear.calculate(&setup, true);
//! ```

pub mod pressure;

pub use pressure::{PressureAlgorithm, RawPressure};
