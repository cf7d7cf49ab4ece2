// ABOUTME: estimate subcommand: builds a bike setup from flags and prints front/rear pressure
// ABOUTME: Shared tire/rim flags apply to both wheels unless a per-wheel flag overrides them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

use clap::Args;
use serde_json::json;
use tire_pressure_studio::config::StudioConfig;
use tire_pressure_studio::external::RemoteEstimator;
use tire_pressure_studio::formatters::format_reading;
use tire_pressure_studio::intelligence::{
    EstimatorOptions, PressureAlgorithm, PressureEstimator, PressureSource,
};
use tire_pressure_studio::models::{
    BikeSetup, Casing, Discipline, PressureEstimate, PressureUnit, RideContext,
    RiderBikeConfiguration, RimConfiguration, RimType, Surface, TireConfiguration, TireWidth,
    WheelDiameter, WheelSetup, Weight, WeightUnit, WidthUnit,
};
use tracing::info;

/// Setup flags for `estimate`
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Rider weight
    #[arg(long)]
    rider_weight: Option<f64>,

    /// Bike weight
    #[arg(long, default_value_t = 0.0)]
    bike_weight: f64,

    /// Unit of both weights (kg, lbs) [env: PRESSURE_MASS_UNIT]
    #[arg(long)]
    mass_unit: Option<WeightUnit>,

    /// Riding discipline (road, gravel, cyclocross, mtb_trail, mtb_enduro, mtb_downhill)
    #[arg(long)]
    discipline: Option<Discipline>,

    /// Surface condition (dry, wet, mixed, snow)
    #[arg(long)]
    surface: Option<Surface>,

    /// Tire width for both wheels
    #[arg(long)]
    tire_width: Option<f64>,

    /// Front tire width
    #[arg(long)]
    front_tire_width: Option<f64>,

    /// Rear tire width
    #[arg(long)]
    rear_tire_width: Option<f64>,

    /// Unit of the tire widths (mm, in)
    #[arg(long, default_value = "mm")]
    width_unit: WidthUnit,

    /// Casing for both tires (standard, supple, reinforced, downhill)
    #[arg(long)]
    casing: Option<Casing>,

    /// Front tire casing
    #[arg(long)]
    front_casing: Option<Casing>,

    /// Rear tire casing
    #[arg(long)]
    rear_casing: Option<Casing>,

    /// Rim type for both wheels (hookless, hooked, tubular, tubes)
    #[arg(long)]
    rim_type: Option<RimType>,

    /// Front rim type
    #[arg(long)]
    front_rim_type: Option<RimType>,

    /// Rear rim type
    #[arg(long)]
    rear_rim_type: Option<RimType>,

    /// Internal rim width in mm for both wheels
    #[arg(long)]
    rim_width: Option<f64>,

    /// Front internal rim width in mm
    #[arg(long)]
    front_rim_width: Option<f64>,

    /// Rear internal rim width in mm
    #[arg(long)]
    rear_rim_width: Option<f64>,

    /// Wheel size (700C, 650B, 650C, 26, 27.5, 29), sent to the compute service
    #[arg(long)]
    diameter: Option<WheelDiameter>,

    /// Display unit (psi, bar) [env: PRESSURE_DISPLAY_UNIT]
    #[arg(long)]
    unit: Option<PressureUnit>,

    /// Estimation formula (linear, load_distribution) [env: PRESSURE_ALGORITHM]
    #[arg(long)]
    algorithm: Option<PressureAlgorithm>,

    /// Leave out the rim inner-width term
    #[arg(long)]
    no_rim_width: bool,

    /// Ask the remote compute service instead of estimating locally
    #[arg(long)]
    remote: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl EstimateArgs {
    fn setup(&self, mass_unit: WeightUnit) -> BikeSetup {
        let rider = RiderBikeConfiguration::from_weights(
            Weight::new(self.rider_weight.unwrap_or(0.0), mass_unit),
            Weight::new(self.bike_weight, mass_unit),
        );

        let wheel = |tire_width: Option<f64>,
                     casing: Option<Casing>,
                     rim_type: Option<RimType>,
                     rim_width: Option<f64>| {
            let width = TireWidth {
                value: tire_width.or(self.tire_width).unwrap_or(0.0),
                unit: self.width_unit,
            };
            WheelSetup::new(
                TireConfiguration::from_width(width, casing.or(self.casing).unwrap_or_default()),
                RimConfiguration::new(
                    rim_type.or(self.rim_type).unwrap_or_default(),
                    rim_width.or(self.rim_width).unwrap_or(0.0),
                ),
            )
        };

        BikeSetup::new(
            rider,
            wheel(
                self.front_tire_width,
                self.front_casing,
                self.front_rim_type,
                self.front_rim_width,
            ),
            wheel(
                self.rear_tire_width,
                self.rear_casing,
                self.rear_rim_type,
                self.rear_rim_width,
            ),
            RideContext::new(
                self.discipline.unwrap_or(Discipline::Road),
                self.surface.unwrap_or_default(),
            ),
        )
        .with_diameter(self.diameter.unwrap_or_default())
    }

    fn options(&self, config: &StudioConfig) -> EstimatorOptions {
        EstimatorOptions {
            rim_width_adjustment: config.rim_width_adjustment && !self.no_rim_width,
            algorithm: self.algorithm.unwrap_or(config.algorithm),
        }
    }
}

/// Run the estimate subcommand
pub async fn run(args: &EstimateArgs) -> anyhow::Result<()> {
    let config = StudioConfig::from_env()?;
    let setup = args.setup(args.mass_unit.unwrap_or(config.mass_unit));
    let options = args.options(&config);
    let unit = args.unit.unwrap_or(config.display_unit);

    let source: Box<dyn PressureSource> = if args.remote {
        Box::new(RemoteEstimator::new(config.remote.clone())?)
    } else {
        Box::new(PressureEstimator::new(options))
    };
    info!(source = source.name(), "Estimating pressure");

    // Remote errors propagate with the generic retry message
    let Some(estimate) = source.estimate(&setup).await? else {
        let rim_width_required = options.rim_width_adjustment && !args.remote;
        print_not_ready(&missing_inputs(&setup, rim_width_required), args.json);
        return Ok(());
    };

    print_estimate(&estimate, &setup, unit, source.name(), args.json);
    Ok(())
}

/// Inputs the estimator still needs, in flag terms
fn missing_inputs(setup: &BikeSetup, rim_width_required: bool) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !(setup.rider.rider_weight_kg.is_finite() && setup.rider.rider_weight_kg > 0.0) {
        missing.push("--rider-weight");
    }
    if !(setup.rider.bike_weight_kg.is_finite() && setup.rider.bike_weight_kg >= 0.0) {
        missing.push("--bike-weight");
    }
    if !setup.front.tire.has_valid_width() {
        missing.push("--front-tire-width");
    }
    if !setup.rear.tire.has_valid_width() {
        missing.push("--rear-tire-width");
    }
    if rim_width_required {
        let valid = |width: f64| width.is_finite() && width > 0.0;
        if !valid(setup.front.rim.inner_width_mm) {
            missing.push("--front-rim-width");
        }
        if !valid(setup.rear.rim.inner_width_mm) {
            missing.push("--rear-rim-width");
        }
    }
    missing
}

fn print_not_ready(missing: &[&str], as_json: bool) {
    if as_json {
        println!("{}", json!({ "status": "not_ready", "missing": missing }));
        return;
    }
    println!("Not enough information for a recommendation yet.");
    if !missing.is_empty() {
        println!("Provide: {}", missing.join(", "));
    }
}

fn print_estimate(
    estimate: &PressureEstimate,
    setup: &BikeSetup,
    unit: PressureUnit,
    source: &str,
    as_json: bool,
) {
    let reading = estimate.in_unit(unit);
    if as_json {
        println!(
            "{}",
            json!({
                "status": "ok",
                "source": source,
                "front_wheel": reading.front_wheel,
                "rear_wheel": reading.rear_wheel,
                "unit": reading.unit,
                "front_psi": estimate.front_psi(),
                "rear_psi": estimate.rear_psi(),
            })
        );
        return;
    }
    println!(
        "{} / {}",
        setup.context.discipline.label(),
        setup.context.surface
    );
    println!("{}", format_reading(&reading));
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: EstimateArgs,
    }

    fn parse(flags: &[&str]) -> EstimateArgs {
        Harness::try_parse_from(std::iter::once("estimate").chain(flags.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_shared_flags_apply_to_both_wheels_unless_overridden() {
        let args = parse(&[
            "--rider-weight", "72", "--tire-width", "28", "--rear-tire-width", "30",
            "--rim-type", "hooked", "--front-rim-type", "tubular", "--rim-width", "23",
        ]);
        let setup = args.setup(WeightUnit::Kg);

        assert!((setup.front.tire.width_mm - 28.0).abs() < f64::EPSILON);
        assert!((setup.rear.tire.width_mm - 30.0).abs() < f64::EPSILON);
        assert_eq!(setup.front.rim.rim_type, RimType::Tubular);
        assert_eq!(setup.rear.rim.rim_type, RimType::Hooked);
        assert!((setup.rear.rim.inner_width_mm - 23.0).abs() < f64::EPSILON);
        assert_eq!(setup.context.discipline, Discipline::Road);
    }

    #[test]
    fn test_units_are_normalized() {
        let args = parse(&[
            "--rider-weight", "160", "--bike-weight", "20", "--tire-width", "2.4",
            "--width-unit", "in", "--discipline", "enduro",
        ]);
        let setup = args.setup(WeightUnit::Lbs);

        assert!((setup.rider.rider_weight_kg - 160.0 * 0.453_592).abs() < 1e-9);
        assert!((setup.front.tire.width_mm - 60.96).abs() < 1e-9);
        assert_eq!(setup.context.discipline, Discipline::MtbEnduro);
    }

    #[test]
    fn test_missing_inputs_lists_flags() {
        let args = parse(&["--front-tire-width", "28"]);
        let setup = args.setup(WeightUnit::Kg);

        assert_eq!(
            missing_inputs(&setup, true),
            vec!["--rider-weight", "--rear-tire-width", "--front-rim-width", "--rear-rim-width"]
        );
        assert_eq!(missing_inputs(&setup, false), vec!["--rider-weight", "--rear-tire-width"]);
    }

    #[test]
    fn test_no_rim_width_flag_overrides_config() {
        let args = parse(&["--no-rim-width", "--algorithm", "load_distribution"]);
        let options = args.options(&StudioConfig::default());

        assert!(!options.rim_width_adjustment);
        assert_eq!(options.algorithm, PressureAlgorithm::LoadDistribution);
    }
}
