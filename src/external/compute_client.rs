// ABOUTME: Client for the external tire pressure compute service (POST /compute)
// ABOUTME: Serializes a bike setup to the service schema and normalizes its PSI/BAR answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Remote compute client
//!
//! The compute service implements the same contract as the local estimator
//! (or a more elaborate version of it) server-side. Each call is a single
//! request: no coalescing, no cancellation, no retry. Every failure, whether
//! transport, HTTP status or body decoding, surfaces as one generic retryable
//! error without a partial result.
//!
//! # Example
//! ```rust,no_run
//! use tire_pressure_studio::external::compute_client::{RemoteEstimator, RemoteEstimatorConfig};
//!
//! # async fn example(setup: tire_pressure_studio::models::BikeSetup) -> tire_pressure_studio::errors::AppResult<()> {
//! let client = RemoteEstimator::new(RemoteEstimatorConfig::default())?;
//! let estimate = client.compute(&setup).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::constants::env_config::{
    COMPUTE_PATH, DEFAULT_API_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::errors::{AppError, AppResult};
use crate::intelligence::PressureSource;
use crate::models::{
    BikeSetup, Casing, Discipline, PressureEstimate, PressureReading, RimType, Surface,
    WheelDiameter, WheelPosition, WheelSetup, Weight, WidthUnit,
};
use crate::utils::http_client::create_client_with_timeout;

/// Name the service gives to setups submitted from this client
const SETUP_NAME: &str = "Custom setup";

/// Remote compute client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEstimatorConfig {
    /// Base URL of the compute service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for RemoteEstimatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl RemoteEstimatorConfig {
    /// Parsed base URL, always ending in `/` so relative joins append
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is not an absolute http(s) URL
    pub fn base(&self) -> AppResult<Url> {
        let mut raw = self.base_url.trim().to_owned();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| {
            AppError::config(format!("Invalid compute service URL '{}': {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "Compute service URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        Ok(url)
    }
}

/// Tire as described to the compute service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TireRequest {
    /// Tire width
    pub width: f64,
    /// Wheel position
    pub position: WheelPosition,
    /// Casing construction
    pub casing: Casing,
    /// Width unit
    pub unit: WidthUnit,
}

/// Wheel as described to the compute service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WheelRequest {
    /// Internal rim width in millimeters
    pub rim_width: f64,
    /// Rim bead interface
    pub rim_type: RimType,
    /// Wheel position
    pub position: WheelPosition,
    /// Nominal wheel size
    pub diameter: WheelDiameter,
}

/// Bike as described to the compute service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BikeRequest {
    /// Setup name
    pub name: String,
    /// Riding discipline
    pub discipline: Discipline,
    /// Front tire
    pub front_tire: TireRequest,
    /// Front wheel
    pub front_wheel: WheelRequest,
    /// Rear tire
    pub rear_tire: TireRequest,
    /// Rear wheel
    pub rear_wheel: WheelRequest,
    /// Bike weight
    pub weight: Weight,
}

/// Body of `POST /compute`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComputeRequest {
    /// Bike description
    pub bike: BikeRequest,
    /// Rider weight
    pub rider_weight: Weight,
    /// Surface condition
    pub surface: Surface,
}

impl ComputeRequest {
    /// Build the request body for a setup
    ///
    /// Weights are sent in kilograms and widths in millimeters, already normalized.
    #[must_use]
    pub fn from_setup(setup: &BikeSetup) -> Self {
        let tire = |wheel: &WheelSetup, position| TireRequest {
            width: wheel.tire.width_mm,
            position,
            casing: wheel.tire.casing,
            unit: WidthUnit::Millimeters,
        };
        let wheel = |wheel: &WheelSetup, position| WheelRequest {
            rim_width: wheel.rim.inner_width_mm,
            rim_type: wheel.rim.rim_type,
            position,
            diameter: setup.diameter,
        };

        Self {
            bike: BikeRequest {
                name: SETUP_NAME.to_owned(),
                discipline: setup.context.discipline,
                front_tire: tire(&setup.front, WheelPosition::Front),
                front_wheel: wheel(&setup.front, WheelPosition::Front),
                rear_tire: tire(&setup.rear, WheelPosition::Rear),
                rear_wheel: wheel(&setup.rear, WheelPosition::Rear),
                weight: Weight::kg(setup.rider.bike_weight_kg),
            },
            rider_weight: Weight::kg(setup.rider.rider_weight_kg),
            surface: setup.context.surface,
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Client for the external compute service
#[derive(Debug, Clone)]
pub struct RemoteEstimator {
    compute_url: Url,
    health_url: Url,
    http_client: reqwest::Client,
}

impl RemoteEstimator {
    /// Create a client for the configured service
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid
    pub fn new(config: RemoteEstimatorConfig) -> AppResult<Self> {
        let health_url = config.base()?;
        let compute_url = health_url.join(COMPUTE_PATH).map_err(|e| {
            AppError::config(format!("Cannot build compute URL from '{health_url}': {e}"))
        })?;

        Ok(Self {
            compute_url,
            health_url,
            http_client: create_client_with_timeout(
                config.timeout_secs,
                config.connect_timeout_secs,
            ),
        })
    }

    /// URL the compute requests are posted to
    #[must_use]
    pub const fn compute_url(&self) -> &Url {
        &self.compute_url
    }

    /// Submit a setup and return the service's reading as sent
    ///
    /// # Errors
    ///
    /// Returns a generic retryable `AppError` on transport failure, non-success
    /// status, or an undecodable body
    pub async fn compute(&self, setup: &BikeSetup) -> AppResult<PressureReading> {
        let body = ComputeRequest::from_setup(setup);
        debug!(url = %self.compute_url, discipline = body.bike.discipline.as_str(), "Submitting setup to compute service");

        let response = self
            .http_client
            .post(self.compute_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| remote_failure("request failed", &e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, detail = %detail, "Compute service rejected request");
            return Err(AppError::remote_unavailable(format!("HTTP {status}")));
        }

        let reading: PressureReading = response
            .json()
            .await
            .map_err(|e| remote_failure("invalid response body", &e))?;

        if !reading.front_wheel.is_finite() || !reading.rear_wheel.is_finite() {
            warn!(?reading, "Compute service returned non-finite pressure");
            return Err(AppError::remote_unavailable("non-finite pressure in response"));
        }

        Ok(reading)
    }

    /// Probe the service root
    ///
    /// # Errors
    ///
    /// Returns a generic retryable `AppError` if the service is unreachable or
    /// does not report itself healthy
    pub async fn health_check(&self) -> AppResult<()> {
        let response = self
            .http_client
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(|e| remote_failure("health probe failed", &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::remote_unavailable(format!(
                "health probe returned HTTP {status}"
            )));
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| remote_failure("invalid health response", &e))?;

        if health.status == "healthy" {
            info!(url = %self.health_url, "Compute service healthy");
            Ok(())
        } else {
            Err(AppError::remote_unavailable(format!(
                "service reported status '{}'",
                health.status
            )))
        }
    }
}

#[async_trait]
impl PressureSource for RemoteEstimator {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn estimate(&self, setup: &BikeSetup) -> AppResult<Option<PressureEstimate>> {
        if !setup.is_ready() {
            return Ok(None);
        }

        let reading = self.compute(setup).await?;
        let estimate = PressureEstimate::from_reading(&reading);
        debug!(
            unit = %reading.unit,
            front = reading.front_wheel,
            rear = reading.rear_wheel,
            front_psi = estimate.front_psi(),
            rear_psi = estimate.rear_psi(),
            "Compute service answered"
        );
        Ok(Some(estimate))
    }
}

fn remote_failure(stage: &str, error: &reqwest::Error) -> AppError {
    warn!(error = %error, "Compute service {stage}");
    AppError::remote_unavailable(format!("{stage}: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        RideContext, RiderBikeConfiguration, RimConfiguration, TireConfiguration,
    };

    fn road_setup() -> BikeSetup {
        BikeSetup::new(
            RiderBikeConfiguration::new(72.0, 8.5),
            WheelSetup::new(
                TireConfiguration::new(28.0, Casing::Standard),
                RimConfiguration::new(RimType::Hookless, 23.0),
            ),
            WheelSetup::new(
                TireConfiguration::new(30.0, Casing::Reinforced),
                RimConfiguration::new(RimType::Hooked, 21.0),
            ),
            RideContext::new(Discipline::Road, Surface::Dry),
        )
    }

    #[test]
    fn test_request_body_matches_service_schema() {
        let body = serde_json::to_value(ComputeRequest::from_setup(&road_setup())).ok();
        let expected = serde_json::json!({
            "bike": {
                "name": "Custom setup",
                "discipline": "ROAD",
                "front_tire": {"width": 28.0, "position": "FRONT", "casing": "STANDARD", "unit": "MM"},
                "front_wheel": {"rim_width": 23.0, "rim_type": "HOOKLESS", "position": "FRONT", "diameter": "700C"},
                "rear_tire": {"width": 30.0, "position": "REAR", "casing": "REINFORCED", "unit": "MM"},
                "rear_wheel": {"rim_width": 21.0, "rim_type": "HOOKED", "position": "REAR", "diameter": "700C"},
                "weight": {"value": 8.5, "unit": "kg"}
            },
            "rider_weight": {"value": 72.0, "unit": "kg"},
            "surface": "DRY"
        });
        assert_eq!(body, Some(expected));
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let config = RemoteEstimatorConfig {
            base_url: "https://pressure.example.com/api".to_owned(),
            ..RemoteEstimatorConfig::default()
        };
        let client = RemoteEstimator::new(config);
        assert_eq!(
            client.ok().map(|c| c.compute_url().to_string()),
            Some("https://pressure.example.com/api/compute".to_owned())
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = RemoteEstimatorConfig {
            base_url: "ftp://pressure.example.com".to_owned(),
            ..RemoteEstimatorConfig::default()
        };
        assert!(RemoteEstimator::new(config).is_err());

        let config = RemoteEstimatorConfig {
            base_url: "not a url".to_owned(),
            ..RemoteEstimatorConfig::default()
        };
        assert!(RemoteEstimator::new(config).is_err());
    }
}
