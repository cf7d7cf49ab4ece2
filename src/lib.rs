// ABOUTME: Main library entry point for Tire Pressure Studio
// ABOUTME: Local pressure estimation, remote compute client, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

#![deny(unsafe_code)]

//! # Tire Pressure Studio
//!
//! Recommends front and rear tire pressure for a bicycle from rider and bike
//! weight, tire width and casing, rim type and inner width, riding discipline
//! and surface condition.
//!
//! ## Features
//!
//! - **Local estimation**: deterministic, clamped front/rear PSI with no I/O
//! - **Two formulas**: additive linear model and load-distribution model
//! - **Units**: PSI/bar display, kg/lbs weights, mm/inch tire widths
//! - **Remote compute**: optional HTTP client for an external compute service
//!
//! ## Architecture
//!
//! - **Models, errors, constants, formatters**: the `tire-pressure-core` crate
//! - **Intelligence**: estimation algorithms and the `PressureSource` trait
//! - **External**: the remote compute client
//! - **Config**: environment-driven settings
//!
//! ## Example Usage
//!
//! ```rust
//! use tire_pressure_studio::intelligence::PressureEstimator;
//! use tire_pressure_studio::models::{
//!     Casing, Discipline, RideContext, RiderBikeConfiguration, RimConfiguration, RimType,
//!     Surface, TireConfiguration,
//! };
//!
//! let estimator = PressureEstimator::default();
//! let estimate = estimator.estimate(
//!     &RiderBikeConfiguration::new(72.0, 8.5),
//!     &TireConfiguration::new(28.0, Casing::Standard),
//!     &TireConfiguration::new(28.0, Casing::Standard),
//!     &RimConfiguration::new(RimType::Hookless, 23.0),
//!     &RimConfiguration::new(RimType::Hookless, 23.0),
//!     &RideContext::new(Discipline::Road, Surface::Dry),
//! );
//! assert!(estimate.is_some());
//! ```

pub use tire_pressure_core::{constants, errors, formatters, models};

/// Configuration management loaded from environment variables
pub mod config;

/// Remote compute service client
pub mod external;

/// Pressure estimation algorithms and sources
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Shared utilities
pub mod utils;
