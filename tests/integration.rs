// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end scenarios exercising the full pipeline: component
//! construction, cascade, sweeps, Monte-Carlo, and Smith-chart point
//! streams acting together rather than in isolation.

use approx::assert_relative_eq;

use rf_cascade::complex::{real, C};
use rf_cascade::components::{self, filters, ComponentKind};
use rf_cascade::montecarlo::{ComponentTolerance, MonteCarloSampler, ToleranceKind};
use rf_cascade::smithchart::{self, SmithChartConfig};
use rf_cascade::sweep::{perform_sweep, FrequencySweep, SweepDistribution};

// Scenario 4 of spec.md §8: 3rd-order Butterworth LC low-pass, fc = 1 GHz,
// Z0 = 50 ohm, swept 0.1-2 GHz.
#[test]
fn butterworth_lowpass_cutoff_and_stopband() {
    let z0 = real(50.0);
    let sweep =
        FrequencySweep::new(0.1e9, 2.0e9, 100, SweepDistribution::Linear).unwrap();
    let builder =
        |f: f64| filters::butterworth_lc_lowpass_3(50.0, 1.0e9, f).map_err(Into::into);

    let result = perform_sweep(builder, &sweep, z0, z0, z0).unwrap();

    let near_cutoff_min = result
        .frequencies_hz
        .iter()
        .zip(result.s21_db())
        .filter(|(f, _)| **f >= 0.9e9 && **f <= 1.1e9)
        .map(|(_, db)| -db)
        .fold(f64::INFINITY, f64::min);
    assert_relative_eq!(near_cutoff_min, 3.0, epsilon = 1.5);

    let deep_stopband_db = result
        .frequencies_hz
        .iter()
        .zip(result.s21_db())
        .min_by(|(a, _), (b, _)| (*a - 2.0e9).abs().partial_cmp(&(*b - 2.0e9).abs()).unwrap())
        .map(|(_, db)| db)
        .unwrap();
    assert!(-deep_stopband_db > 10.0);
}

// Scenario 5 of spec.md §8: adaptive Smith-chart refinement of a high-Q
// resonator produces strictly more points than non-adaptive passthrough.
#[test]
fn smith_chart_adaptive_refinement_increases_point_density() {
    let z0 = 50.0;
    let z_load = real(50.0);
    let sweep =
        FrequencySweep::new(0.95e9, 1.05e9, 11, SweepDistribution::Linear).unwrap();

    let builder = |f: f64| -> Result<rf_cascade::twoport::TwoPort, rf_cascade::RfError> {
        let l = components::series_inductor(10e-9, f)?;
        let c = components::shunt_capacitor(2.5e-12, f)?;
        Ok(l.cascade(&c))
    };

    let adaptive_config = SmithChartConfig::new(0.001, 0.01, 0.8, 4.0);
    let adaptive = smithchart::from_builder_and_frequency_sweep(
        builder, &sweep, z0, z_load, &adaptive_config,
    )
    .unwrap();

    let non_adaptive_config = adaptive_config.non_adaptive();
    let uniform = smithchart::from_builder_and_frequency_sweep(
        builder, &sweep, z0, z_load, &non_adaptive_config,
    )
    .unwrap();

    assert_eq!(uniform.xy.len(), 22);
    assert!(adaptive.xy.len() > uniform.xy.len());

    for v in adaptive.xy.iter().chain(uniform.xy.iter()) {
        assert!(*v >= -1.0 && *v <= 1.0);
    }
}

// Scenario 6 of spec.md §8: Monte-Carlo on a 50 ohm resistor, 5% Gaussian
// tolerance, 1000 samples, fixed seed, with samples fed straight into the
// Smith-chart scatter mode.
#[test]
fn monte_carlo_resistor_feeds_smith_chart_scatter() {
    let tol = ComponentTolerance::new(ComponentKind::SeriesR, 50.0, 0.05, ToleranceKind::Gaussian)
        .unwrap();
    let mut sampler = MonteCarloSampler::from_seed(99);
    let result = sampler
        .analyze(
            &[tol],
            1000,
            |v| components::series_resistor(v[0]).map_err(Into::into),
            real(50.0),
            real(50.0),
            None,
        )
        .unwrap();

    let stats = result.impedance_statistics();
    assert_relative_eq!(stats.mean.re, 50.0, epsilon = 1.0);
    let expected_sigma = 50.0 * 0.05 / 3.0;
    assert_relative_eq!(stats.stddev.0, expected_sigma, epsilon = 0.3);
    for s in &result.samples {
        assert!(s[0] > 0.0);
    }

    let scatter = smithchart::from_impedance_list(&result.impedances, 50.0).unwrap();
    assert_eq!(scatter.point_count(), 1000);
    for v in &scatter.xy {
        assert!(*v >= -1.0 && *v <= 1.0);
    }
}

#[test]
fn component_value_sweep_tracks_reflection_coefficient_through_resonance() {
    use rf_cascade::sweep::{perform_component_sweep, ComponentSweep};

    let sweep = ComponentSweep::new(
        ComponentKind::ShuntC,
        1e-12,
        10e-12,
        20,
        1e9,
        SweepDistribution::Linear,
    )
    .unwrap();

    let result = perform_component_sweep(&sweep, real(50.0), None, None, real(50.0)).unwrap();
    assert_eq!(result.values.len(), 20);
    for gamma in &result.reflection {
        assert!(gamma.norm() <= 1.0 + 1e-9);
    }
    for (z, y) in result.z_in.iter().zip(result.y_in.iter()) {
        let product = *z * *y;
        assert_relative_eq!(product.re, 1.0, epsilon = 1e-6);
        assert_relative_eq!(product.im, 0.0, epsilon = 1e-6);
    }
}

#[test]
fn reflection_impedance_round_trip_holds_for_complex_z0_free_functions() {
    let z = C::new(80.0, -30.0);
    let gamma = smithchart::impedance_to_reflection(z, 50.0).unwrap();
    let back = smithchart::reflection_to_impedance(gamma, 50.0).unwrap();
    assert_relative_eq!(back.re, z.re, epsilon = 1e-9);
    assert_relative_eq!(back.im, z.im, epsilon = 1e-9);
}
