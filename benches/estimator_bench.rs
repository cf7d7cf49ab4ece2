// ABOUTME: Criterion benchmarks for local tire pressure estimation
// ABOUTME: Measures both formulas across disciplines and a full estimate-and-format pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

//! Criterion benchmarks for the pressure estimator.
//!
//! The estimator recomputes on every input change, so a single call must stay
//! far below interactive latency.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tire_pressure_studio::formatters::format_reading;
use tire_pressure_studio::intelligence::{EstimatorOptions, PressureAlgorithm, PressureEstimator};
use tire_pressure_studio::models::{
    BikeSetup, Casing, Discipline, PressureUnit, RideContext, RiderBikeConfiguration,
    RimConfiguration, RimType, Surface, TireConfiguration, WheelSetup,
};

fn setup_for(discipline: Discipline) -> BikeSetup {
    let width_mm = match discipline {
        Discipline::Road => 28.0,
        Discipline::Cyclocross => 33.0,
        Discipline::Gravel => 42.0,
        Discipline::MtbTrail | Discipline::MtbEnduro | Discipline::MtbDownhill => 61.0,
    };
    let wheel = WheelSetup::new(
        TireConfiguration::new(width_mm, Casing::Standard),
        RimConfiguration::new(RimType::Hookless, 25.0),
    );
    BikeSetup::new(
        RiderBikeConfiguration::new(75.0, 9.5),
        wheel,
        wheel,
        RideContext::new(discipline, Surface::Mixed),
    )
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    for algorithm in [PressureAlgorithm::Linear, PressureAlgorithm::LoadDistribution] {
        let estimator =
            PressureEstimator::new(EstimatorOptions::default().with_algorithm(algorithm));
        for discipline in [Discipline::Road, Discipline::Gravel, Discipline::MtbEnduro] {
            let setup = setup_for(discipline);
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), discipline.as_str()),
                &setup,
                |b, setup| b.iter(|| estimator.estimate_setup(black_box(setup))),
            );
        }
    }

    group.finish();
}

fn bench_estimate_and_format(c: &mut Criterion) {
    let estimator = PressureEstimator::default();
    let setup = setup_for(Discipline::Road);

    c.bench_function("estimate_and_format_bar", |b| {
        b.iter(|| {
            estimator
                .estimate_setup(black_box(&setup))
                .map(|estimate| format_reading(&estimate.in_unit(PressureUnit::Bar)))
        });
    });
}

criterion_group!(benches, bench_algorithms, bench_estimate_and_format);
criterion_main!(benches);
