// ABOUTME: health subcommand: probes the remote compute service root
// ABOUTME: Exits non-zero when the service is unreachable or unhealthy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use tire_pressure_studio::config::StudioConfig;
use tire_pressure_studio::external::RemoteEstimator;
use tracing::info;

/// Probe the configured compute service
pub async fn run() -> anyhow::Result<()> {
    let config = StudioConfig::from_env()?;
    info!(url = %config.remote.base_url, "Probing compute service");

    let client = RemoteEstimator::new(config.remote.clone())?;
    client.health_check().await?;

    println!("Compute service at {} is healthy", config.remote.base_url);
    Ok(())
}
