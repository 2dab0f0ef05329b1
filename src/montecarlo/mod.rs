// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Monte-Carlo tolerance analysis: per-component distributions, a sampler
//! owning RNG state, correlated sampling via Cholesky, and the statistics
//! (mean, componentwise standard deviation, yield, percentile) the rest of
//! the crate reports.

mod correlation;
mod distribution;
mod error;
mod sampler;

pub use correlation::{apply_cholesky, cholesky};
pub use distribution::{ComponentTolerance, ToleranceKind};
pub use error::MonteCarloError;
pub use sampler::{
    default_yield_predicate, ImpedanceStatistics, MonteCarloResult, MonteCarloSampler,
};

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::complex::real;
    use crate::components::{self, ComponentKind};

    #[test]
    fn uniform_samples_stay_within_bounds() {
        let tol = ComponentTolerance::new(ComponentKind::SeriesR, 50.0, 0.1, ToleranceKind::Uniform)
            .unwrap();
        let mut sampler = MonteCarloSampler::from_seed(42);
        let result = sampler
            .analyze(&[tol], 200, |v| components::build(ComponentKind::SeriesR, v[0], 1e9)
                .map_err(Into::into), real(50.0), real(50.0), None)
            .unwrap();
        for sample in &result.samples {
            assert!(sample[0] >= 45.0 && sample[0] <= 55.0);
        }
    }

    // Scenario 6 of spec.md §8: 50 ohm resistor, 5% Gaussian tolerance,
    // 1000 samples, fixed seed.
    #[test]
    fn scenario_gaussian_resistor_statistics() {
        let tol =
            ComponentTolerance::new(ComponentKind::SeriesR, 50.0, 0.05, ToleranceKind::Gaussian)
                .unwrap();
        let mut sampler = MonteCarloSampler::from_seed(7);
        let result = sampler
            .analyze(
                &[tol],
                1000,
                |v| components::build(ComponentKind::SeriesR, v[0], 1e9).map_err(Into::into),
                real(50.0),
                real(50.0),
                None,
            )
            .unwrap();

        let stats = result.impedance_statistics();
        assert!((stats.mean.re - 50.0).abs() < 1.0);
        let expected_sigma = 50.0 * 0.05 / 3.0;
        assert!((stats.stddev.0 - expected_sigma).abs() < 0.3);
        for sample in &result.samples {
            assert!(sample[0] > 0.0);
        }
    }

    #[test]
    fn correlated_sampling_uses_cholesky_path() {
        let tol_a =
            ComponentTolerance::new(ComponentKind::SeriesR, 50.0, 0.1, ToleranceKind::Gaussian)
                .unwrap();
        let tol_b =
            ComponentTolerance::new(ComponentKind::ShuntR, 100.0, 0.1, ToleranceKind::Gaussian)
                .unwrap();
        let correlation = array![[1.0, 0.8], [0.8, 1.0]];
        let mut sampler = MonteCarloSampler::from_seed(3);
        let result = sampler
            .analyze(
                &[tol_a, tol_b],
                100,
                |v| {
                    let series = components::series_resistor(v[0])?;
                    let shunt = components::shunt_resistor(v[1])?;
                    Ok(series.cascade(&shunt))
                },
                real(50.0),
                real(50.0),
                Some(&correlation),
            )
            .unwrap();
        assert_eq!(result.samples.len(), 100);
    }

    #[test]
    fn yield_percent_reflects_vswr_threshold() {
        let tol = ComponentTolerance::new(ComponentKind::SeriesR, 0.0, 0.0, ToleranceKind::Uniform)
            .unwrap();
        let mut sampler = MonteCarloSampler::from_seed(1);
        let result = sampler
            .analyze(
                &[tol],
                10,
                |_| components::series_resistor(0.0).map_err(Into::into),
                real(50.0),
                real(50.0),
                None,
            )
            .unwrap();
        assert_eq!(result.yield_percent(default_yield_predicate), 100.0);
    }

    #[test]
    fn vswr_yield_curve_is_monotonic_in_threshold() {
        let tol =
            ComponentTolerance::new(ComponentKind::SeriesR, 50.0, 0.2, ToleranceKind::Gaussian)
                .unwrap();
        let mut sampler = MonteCarloSampler::from_seed(11);
        let result = sampler
            .analyze(
                &[tol],
                500,
                |v| components::series_resistor(v[0]).map_err(Into::into),
                real(50.0),
                real(50.0),
                None,
            )
            .unwrap();

        let curve = result.vswr_yield_curve(&[1.1, 1.5, 2.0, 5.0]);
        assert_eq!(curve.len(), 4);
        for pair in curve.windows(2) {
            assert!(pair[1].1 >= pair[0].1);
        }
        assert_eq!(curve[2].1, result.yield_percent(default_yield_predicate));
    }

    #[test]
    fn mismatched_correlation_matrix_size_is_rejected() {
        let tol_a =
            ComponentTolerance::new(ComponentKind::SeriesR, 50.0, 0.1, ToleranceKind::Gaussian)
                .unwrap();
        let tol_b =
            ComponentTolerance::new(ComponentKind::ShuntR, 100.0, 0.1, ToleranceKind::Gaussian)
                .unwrap();
        let correlation = array![[1.0, 0.8, 0.0], [0.8, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let mut sampler = MonteCarloSampler::from_seed(5);
        let result = sampler.analyze(
            &[tol_a, tol_b],
            10,
            |v| {
                let series = components::series_resistor(v[0])?;
                let shunt = components::shunt_resistor(v[1])?;
                Ok(series.cascade(&shunt))
            },
            real(50.0),
            real(50.0),
            Some(&correlation),
        );
        assert!(matches!(result, Err(MonteCarloError::InvalidCorrelation(_))));
    }
}
