// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Benchmarks for the hot paths of a sweep-heavy workload: cascading a
//! multi-section network, converting it to S-parameters, running a
//! frequency sweep over it, and drawing a Monte-Carlo sample table.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rf_cascade::complex::real;
use rf_cascade::components::{self, filters};
use rf_cascade::montecarlo::{ComponentTolerance, MonteCarloSampler, ToleranceKind};
use rf_cascade::sweep::{perform_sweep, FrequencySweep, SweepDistribution};

fn butterworth_network(f: f64) -> rf_cascade::Result<rf_cascade::twoport::TwoPort> {
    filters::butterworth_lc_lowpass_3(50.0, 1.0e9, f).map_err(Into::into)
}

fn bench_cascade(c: &mut Criterion) {
    c.bench_function("cascade_five_sections", |b| {
        b.iter(|| {
            let series = components::series_resistor(black_box(10.0)).unwrap();
            let shunt = components::shunt_capacitor(black_box(2e-12), black_box(1e9)).unwrap();
            let mut net = components::series_inductor(black_box(5e-9), black_box(1e9)).unwrap();
            for _ in 0..5 {
                net = net.cascade(&series).cascade(&shunt);
            }
            black_box(net.to_s_parameters(real(50.0)).unwrap())
        })
    });
}

fn bench_frequency_sweep(c: &mut Criterion) {
    let sweep =
        FrequencySweep::new(0.1e9, 2.0e9, black_box(200), SweepDistribution::Linear).unwrap();
    c.bench_function("frequency_sweep_200_points", |b| {
        b.iter(|| {
            black_box(
                perform_sweep(butterworth_network, &sweep, real(50.0), real(50.0), real(50.0))
                    .unwrap(),
            )
        })
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let tol = ComponentTolerance::new(
        components::ComponentKind::SeriesR,
        50.0,
        0.05,
        ToleranceKind::Gaussian,
    )
    .unwrap();
    c.bench_function("monte_carlo_1000_samples", |b| {
        b.iter(|| {
            let mut sampler = MonteCarloSampler::from_seed(1);
            black_box(
                sampler
                    .analyze(
                        &[tol],
                        black_box(1000),
                        |v| components::series_resistor(v[0]).map_err(Into::into),
                        real(50.0),
                        real(50.0),
                        None,
                    )
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_cascade, bench_frequency_sweep, bench_monte_carlo);
criterion_main!(benches);
