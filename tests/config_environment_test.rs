// ABOUTME: Tests for environment-driven configuration
// ABOUTME: Defaults, overrides, and ConfigInvalid errors naming the offending variable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use tire_pressure_studio::config::StudioConfig;
use tire_pressure_studio::errors::ErrorCode;
use tire_pressure_studio::intelligence::PressureAlgorithm;
use tire_pressure_studio::models::{PressureUnit, WeightUnit};

const VARIABLES: [&str; 7] = [
    "PRESSURE_API_URL",
    "PRESSURE_API_TIMEOUT_SECS",
    "PRESSURE_API_CONNECT_TIMEOUT_SECS",
    "PRESSURE_RIM_WIDTH_ADJUSTMENT",
    "PRESSURE_ALGORITHM",
    "PRESSURE_DISPLAY_UNIT",
    "PRESSURE_MASS_UNIT",
];

fn clear_environment() {
    for variable in VARIABLES {
        env::remove_var(variable);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_environment();

    let config = StudioConfig::from_env().unwrap();
    assert_eq!(config, StudioConfig::default());
    assert_eq!(config.algorithm, PressureAlgorithm::Linear);
    assert!(config.rim_width_adjustment);
    assert_eq!(config.display_unit, PressureUnit::Psi);
    assert_eq!(config.mass_unit, WeightUnit::Kg);
    assert_eq!(config.remote.base_url, "http://127.0.0.1:8088");
    assert_eq!(config.remote.timeout_secs, 30);
    assert_eq!(config.remote.connect_timeout_secs, 10);
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_environment();
    env::set_var("PRESSURE_API_URL", "https://pressure.example.com/api");
    env::set_var("PRESSURE_API_TIMEOUT_SECS", "5");
    env::set_var("PRESSURE_RIM_WIDTH_ADJUSTMENT", "off");
    env::set_var("PRESSURE_ALGORITHM", "load_distribution");
    env::set_var("PRESSURE_DISPLAY_UNIT", "bar");
    env::set_var("PRESSURE_MASS_UNIT", "lbs");

    let config = StudioConfig::from_env().unwrap();
    clear_environment();

    assert_eq!(config.remote.base_url, "https://pressure.example.com/api");
    assert_eq!(config.remote.timeout_secs, 5);
    assert_eq!(config.remote.connect_timeout_secs, 10);
    assert_eq!(config.algorithm, PressureAlgorithm::LoadDistribution);
    assert_eq!(config.display_unit, PressureUnit::Bar);
    assert_eq!(config.mass_unit, WeightUnit::Lbs);

    let options = config.estimator_options();
    assert!(!options.rim_width_adjustment);
    assert_eq!(options.algorithm, PressureAlgorithm::LoadDistribution);
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_environment();
    env::set_var("PRESSURE_ALGORITHM", "  ");

    let config = StudioConfig::from_env().unwrap();
    clear_environment();

    assert_eq!(config.algorithm, PressureAlgorithm::Linear);
}

#[test]
#[serial]
fn test_invalid_values_name_the_variable() {
    let cases = [
        ("PRESSURE_ALGORITHM", "quadratic"),
        ("PRESSURE_DISPLAY_UNIT", "kpa"),
        ("PRESSURE_MASS_UNIT", "stone"),
        ("PRESSURE_RIM_WIDTH_ADJUSTMENT", "maybe"),
        ("PRESSURE_API_TIMEOUT_SECS", "0"),
        ("PRESSURE_API_CONNECT_TIMEOUT_SECS", "ten"),
        ("PRESSURE_API_URL", "not a url"),
    ];

    for (variable, value) in cases {
        clear_environment();
        env::set_var(variable, value);

        let error = StudioConfig::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{variable}={value}");
        assert_eq!(error.context.field.as_deref(), Some(variable));
        assert!(error.message.contains(variable));
    }
    clear_environment();
}
