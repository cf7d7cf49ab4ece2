// ABOUTME: Tests for global tracing subscriber installation
// ABOUTME: Runs in its own binary since only one subscriber can be installed per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tire_pressure_studio::logging::{LogFormat, LoggingConfig};

#[test]
fn test_pretty_format_installs_once() {
    let config = LoggingConfig {
        level: "debug".into(),
        format: LogFormat::Pretty,
        include_location: true,
    };

    config.init().unwrap();
    tracing::info!(wheel = "front", "subscriber ready");

    // A second global subscriber is rejected rather than silently replacing the first
    assert!(LoggingConfig::default().init().is_err());
}
