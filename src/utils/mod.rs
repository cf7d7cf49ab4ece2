// ABOUTME: Shared utilities for the studio crate
// ABOUTME: HTTP client construction for the remote compute client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

/// HTTP client construction
pub mod http_client;
