// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Environment-driven estimator options, display defaults, and remote service location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Configuration module for Tire Pressure Studio
//!
//! All settings come from environment variables with defaults; there is no
//! configuration file. Command-line flags override what is loaded here.

/// Environment configuration
pub mod environment;

pub use environment::StudioConfig;
