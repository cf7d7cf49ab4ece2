// ABOUTME: Environment variable names and defaults for runtime configuration
// ABOUTME: Single place to look up every knob the studio reads from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

/// Base URL of the remote compute service
pub const API_URL_VAR: &str = "PRESSURE_API_URL";

/// Request timeout for the remote compute service, in seconds
pub const API_TIMEOUT_VAR: &str = "PRESSURE_API_TIMEOUT_SECS";

/// Connect timeout for the remote compute service, in seconds
pub const API_CONNECT_TIMEOUT_VAR: &str = "PRESSURE_API_CONNECT_TIMEOUT_SECS";

/// Toggle for the rim inner-width adjustment term
pub const RIM_WIDTH_ADJUSTMENT_VAR: &str = "PRESSURE_RIM_WIDTH_ADJUSTMENT";

/// Estimation algorithm selection
pub const ALGORITHM_VAR: &str = "PRESSURE_ALGORITHM";

/// Default display unit for results
pub const DISPLAY_UNIT_VAR: &str = "PRESSURE_DISPLAY_UNIT";

/// Default unit for weight inputs
pub const MASS_UNIT_VAR: &str = "PRESSURE_MASS_UNIT";

/// Default compute service location (local development server)
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8088";

/// Path of the compute endpoint relative to the base URL
pub const COMPUTE_PATH: &str = "compute";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
