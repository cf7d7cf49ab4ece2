// ABOUTME: External API client modules (remote tire pressure compute service)
// ABOUTME: Provides the HTTP-backed PressureSource used when remote estimation is enabled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! External API Clients
//!
//! This module contains clients for external services used by Tire Pressure Studio.

pub mod compute_client;

// Re-export commonly used types
pub use compute_client::{ComputeRequest, RemoteEstimator, RemoteEstimatorConfig};
