// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors and pressure formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one large file.

/// Unit conversion and measurement constants
pub mod units;

/// Pressure formula coefficients, offsets, and clamp bounds
pub mod pressure;

/// Environment variable names and configuration defaults
pub mod env_config;
