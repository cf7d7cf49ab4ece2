// ABOUTME: tire-pressure CLI - front/rear tire pressure recommendations from the command line
// ABOUTME: Parses setup flags, runs the local or remote estimator, and prints PSI or bar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio
//!
//! Usage:
//! ```bash
//! # Road bike, same tire and rim front and rear
//! tire-pressure estimate --rider-weight 72 --bike-weight 8.5 --tire-width 28 --rim-width 23
//!
//! # Mixed widths, rear reinforced, bar output
//! tire-pressure estimate --rider-weight 165 --mass-unit lbs --discipline gravel \
//!     --front-tire-width 40 --rear-tire-width 42 --rear-casing reinforced --rim-width 25 --unit bar
//!
//! # Ask the compute service instead of the local formula
//! tire-pressure estimate --rider-weight 72 --tire-width 28 --rim-width 23 --remote
//!
//! # Convert a reading
//! tire-pressure convert 60 --from psi --to bar
//!
//! # Check the compute service
//! tire-pressure health
//! ```

mod commands;

use clap::{Parser, Subcommand};
use tire_pressure_studio::logging::LoggingConfig;
use tire_pressure_studio::models::PressureUnit;

use commands::estimate::EstimateArgs;

#[derive(Parser)]
#[command(
    name = "tire-pressure",
    version,
    about = "Tire pressure recommendations for road, gravel and MTB",
    long_about = "Estimates front and rear tire pressure from rider and bike weight, tire and rim setup, discipline and surface."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate front and rear pressure for a setup
    Estimate(EstimateArgs),

    /// Convert a pressure between PSI and bar
    Convert {
        /// Pressure value
        value: f64,

        /// Unit of the value
        #[arg(long, default_value = "psi")]
        from: PressureUnit,

        /// Unit to convert to
        #[arg(long, default_value = "bar")]
        to: PressureUnit,
    },

    /// Probe the remote compute service
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().with_verbosity(cli.verbose).init()?;

    match cli.command {
        Command::Estimate(args) => commands::estimate::run(&args).await,
        Command::Convert { value, from, to } => {
            commands::convert::run(value, from, to);
            Ok(())
        }
        Command::Health => commands::health::run().await,
    }
}
