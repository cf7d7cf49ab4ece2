// ABOUTME: Core types and constants for Tire Pressure Studio
// ABOUTME: Foundation crate with error handling, domain models, constants, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

#![deny(unsafe_code)]

//! # Tire Pressure Core
//!
//! Foundation crate providing shared types and constants for Tire Pressure
//! Studio. It changes rarely, so the estimator and client crates compile
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit factors, formula coefficients, and configuration keys
//! - **models**: Rider, bike, tire, rim, ride context, and pressure result types
//! - **formatters**: Display rounding for pressure values

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Domain models (weights, tires, rims, ride context, pressure)
pub mod models;

/// Display formatting for pressure readings
pub mod formatters;
