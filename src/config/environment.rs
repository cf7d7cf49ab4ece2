// ABOUTME: Environment configuration for estimator options, display units, and the compute service
// ABOUTME: Parses PRESSURE_* variables into a typed StudioConfig, rejecting malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Environment-based configuration

use std::env;
use std::str::FromStr;

use tracing::debug;

use crate::constants::env_config::{
    ALGORITHM_VAR, API_CONNECT_TIMEOUT_VAR, API_TIMEOUT_VAR, API_URL_VAR, DEFAULT_API_URL,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DISPLAY_UNIT_VAR, MASS_UNIT_VAR,
    RIM_WIDTH_ADJUSTMENT_VAR,
};
use crate::errors::{AppError, AppResult};
use crate::external::RemoteEstimatorConfig;
use crate::intelligence::{EstimatorOptions, PressureAlgorithm};
use crate::models::{PressureUnit, WeightUnit};

/// Runtime configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    /// Estimation formula
    pub algorithm: PressureAlgorithm,
    /// Include the rim inner-width term
    pub rim_width_adjustment: bool,
    /// Unit results are displayed in
    pub display_unit: PressureUnit,
    /// Unit weights are entered in
    pub mass_unit: WeightUnit,
    /// Remote compute service settings
    pub remote: RemoteEstimatorConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            algorithm: PressureAlgorithm::default(),
            rim_width_adjustment: true,
            display_unit: PressureUnit::default(),
            mass_unit: WeightUnit::default(),
            remote: RemoteEstimatorConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults. Set but malformed variables are an
    /// error naming the variable, never silently replaced by the default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if any variable fails to parse
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            algorithm: parse_env(ALGORITHM_VAR)?.unwrap_or_default(),
            rim_width_adjustment: parse_bool_env(RIM_WIDTH_ADJUSTMENT_VAR)?.unwrap_or(true),
            display_unit: parse_env(DISPLAY_UNIT_VAR)?.unwrap_or_default(),
            mass_unit: parse_env(MASS_UNIT_VAR)?.unwrap_or_default(),
            remote: RemoteEstimatorConfig {
                base_url: env_var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
                timeout_secs: parse_timeout_env(API_TIMEOUT_VAR)?.unwrap_or(DEFAULT_TIMEOUT_SECS),
                connect_timeout_secs: parse_timeout_env(API_CONNECT_TIMEOUT_VAR)?
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            },
        };

        config.remote.base().map_err(|e| {
            AppError::config_invalid(API_URL_VAR, format!("{API_URL_VAR}: {}", e.message))
        })?;

        debug!(
            algorithm = config.algorithm.name(),
            rim_width_adjustment = config.rim_width_adjustment,
            display_unit = %config.display_unit,
            mass_unit = %config.mass_unit,
            api_url = %config.remote.base_url,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Estimator options derived from this configuration
    #[must_use]
    pub const fn estimator_options(&self) -> EstimatorOptions {
        EstimatorOptions {
            rim_width_adjustment: self.rim_width_adjustment,
            algorithm: self.algorithm,
        }
    }
}

/// Non-empty value of an environment variable
fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_env<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr<Err = AppError>,
{
    env_var(key)
        .map(|raw| {
            raw.parse()
                .map_err(|e: AppError| AppError::config_invalid(key, format!("{key}: {}", e.message)))
        })
        .transpose()
}

fn parse_bool_env(key: &str) -> AppResult<Option<bool>> {
    env_var(key)
        .map(|raw| match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(AppError::config_invalid(
                key,
                format!("{key}: expected true or false, got '{raw}'"),
            )),
        })
        .transpose()
}

fn parse_timeout_env(key: &str) -> AppResult<Option<u64>> {
    env_var(key)
        .map(|raw| match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(AppError::config_invalid(
                key,
                format!("{key}: expected a positive number of seconds, got '{raw}'"),
            )),
        })
        .transpose()
}
