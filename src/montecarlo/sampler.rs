// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Monte-Carlo sampler: owns RNG state, draws per-component sample
//! tables, invokes a caller-supplied builder, and collects statistics.

use log::debug;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rayon::prelude::*;

use crate::complex::C;
use crate::error::RfError;
use crate::params::{vswr_from_gamma_magnitude, SParams};
use crate::twoport::TwoPort;

use super::correlation::{apply_cholesky, cholesky};
use super::distribution::ComponentTolerance;
use super::error::MonteCarloError;

/// The default yield predicate: `VSWR < 2`.
pub fn default_yield_predicate(s: &SParams) -> bool {
    vswr_from_gamma_magnitude(s.s11.norm()) < 2.0
}

/// The componentwise mean and standard deviation of a Monte-Carlo
/// impedance population, plus the full 2x2 covariance of `(Re, Im)` as a
/// supplement to the spec's independent-scalar treatment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpedanceStatistics {
    pub mean: C,
    /// `(σ_Re, σ_Im)`, each computed as an independent scalar sample per
    /// the documented (if unusual) choice this engine inherits.
    pub stddev: (f64, f64),
    /// `[[Var(Re), Cov(Re,Im)], [Cov(Re,Im), Var(Im)]]`.
    pub covariance: [[f64; 2]; 2],
}

/// The collected result of a Monte-Carlo analysis run. Arrays are parallel
/// and in sample order.
#[derive(Debug, Clone)]
pub struct MonteCarloResult {
    pub impedances: Vec<C>,
    pub s_params: Vec<SParams>,
    /// `samples[i]` is the length-N component value vector used for sample
    /// `i`.
    pub samples: Vec<Vec<f64>>,
}

impl MonteCarloResult {
    fn with_capacity(m: usize) -> Self {
        Self {
            impedances: Vec::with_capacity(m),
            s_params: Vec::with_capacity(m),
            samples: Vec::with_capacity(m),
        }
    }

    /// Mean impedance, componentwise standard deviation, and the 2x2
    /// `(Re, Im)` covariance.
    pub fn impedance_statistics(&self) -> ImpedanceStatistics {
        let m = self.impedances.len() as f64;
        let mean_re = self.impedances.iter().map(|z| z.re).sum::<f64>() / m;
        let mean_im = self.impedances.iter().map(|z| z.im).sum::<f64>() / m;
        let mean = C::new(mean_re, mean_im);

        let denom = (m - 1.0).max(1.0);
        let mut var_re = 0.0;
        let mut var_im = 0.0;
        let mut cov = 0.0;
        for z in &self.impedances {
            let dre = z.re - mean_re;
            let dim = z.im - mean_im;
            var_re += dre * dre;
            var_im += dim * dim;
            cov += dre * dim;
        }
        var_re /= denom;
        var_im /= denom;
        cov /= denom;

        ImpedanceStatistics {
            mean,
            stddev: (var_re.sqrt(), var_im.sqrt()),
            covariance: [[var_re, cov], [cov, var_im]],
        }
    }

    /// The fraction (percent) of samples whose S-parameters satisfy
    /// `predicate`.
    pub fn yield_percent(&self, predicate: impl Fn(&SParams) -> bool) -> f64 {
        if self.s_params.is_empty() {
            return 0.0;
        }
        let passing = self.s_params.iter().filter(|s| predicate(s)).count();
        100.0 * passing as f64 / self.s_params.len() as f64
    }

    /// The impedance at percentile `p` (0-100), ranked by `|Z|`, not
    /// interpolated: samples are sorted by magnitude and the sample at rank
    /// `floor(p*M/100)` (clamped to `M-1`) is returned.
    pub fn percentile_impedance(&self, p: f64) -> Option<C> {
        if self.impedances.is_empty() {
            return None;
        }
        let mut sorted: Vec<C> = self.impedances.clone();
        sorted.sort_by(|a, b| a.norm().partial_cmp(&b.norm()).unwrap());
        let rank = ((p * sorted.len() as f64 / 100.0).floor() as usize).min(sorted.len() - 1);
        Some(sorted[rank])
    }

    /// The yield curve: for each of `thresholds`, the percent of samples
    /// whose `|S11|`-derived VSWR stays below that threshold. `yield_percent`
    /// with [`default_yield_predicate`] is the single point on this curve at
    /// threshold 2.0.
    pub fn vswr_yield_curve(&self, thresholds: &[f64]) -> Vec<(f64, f64)> {
        thresholds
            .iter()
            .map(|&threshold| {
                (threshold, self.yield_percent(|s| vswr_from_gamma_magnitude(s.s11.norm()) < threshold))
            })
            .collect()
    }
}

/// Owns the pseudo-random generator state for a Monte-Carlo run. Not
/// `Sync`; share one sampler per thread if parallelizing, seeded
/// deterministically for reproducibility.
pub struct MonteCarloSampler {
    rng: StdRng,
}

impl MonteCarloSampler {
    /// A sampler seeded deterministically. Two samplers built from the same
    /// seed draw identical sample tables.
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// A sampler seeded from the system's entropy source; not reproducible.
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Draw an `M x N` sample table from `tolerances`, optionally correlated
    /// via the Cholesky factor of `correlation` (falls back to independent
    /// sampling when `None`, per the documented fallback).
    fn sample_table(
        &mut self,
        tolerances: &[ComponentTolerance],
        m: usize,
        correlation: Option<&Array2<f64>>,
    ) -> Result<Vec<Vec<f64>>, MonteCarloError> {
        let n = tolerances.len();
        if let Some(matrix) = correlation {
            if matrix.nrows() != n {
                return Err(MonteCarloError::InvalidCorrelation(format!(
                    "correlation matrix is {}x{} but {} tolerances were supplied",
                    matrix.nrows(),
                    matrix.ncols(),
                    n
                )));
            }
        }
        let chol = correlation.map(cholesky).transpose()?;

        let mut table = Vec::with_capacity(m);
        for _ in 0..m {
            let row = if let Some(l) = &chol {
                let standard_normals: Vec<f64> =
                    (0..n).map(|_| StandardNormal.sample(&mut self.rng)).collect();
                let correlated = apply_cholesky(l, &standard_normals);
                tolerances
                    .iter()
                    .zip(correlated.iter())
                    .map(|(tol, z)| {
                        let lo = tol.nominal * (1.0 - tol.tolerance);
                        let sigma = tol.nominal * tol.tolerance / 3.0;
                        let hi = tol.nominal * (1.0 + tol.tolerance);
                        let raw = tol.nominal + z * sigma;
                        let clamped = raw.clamp(lo.min(hi), lo.max(hi));
                        if tol.kind.is_physical() {
                            clamped.max(0.01 * tol.nominal)
                        } else {
                            clamped
                        }
                    })
                    .collect()
            } else {
                tolerances.iter().map(|tol| tol.sample(&mut self.rng)).collect()
            };
            table.push(row);
        }
        Ok(table)
    }

    /// Draw an `M x N` sample table and, for every row, invoke `builder`
    /// with the row's value vector, compute `Z_in` under `z_load`, and
    /// convert to `S` at `z0_system`. Propagates the first error the
    /// builder raises together with the failing sample index, and abandons
    /// the remainder (no partial result).
    ///
    /// Per-sample evaluation is independent (spec.md §5), so the builder
    /// invocation and the derived-quantity conversion run across a `rayon`
    /// thread pool; the sampler's own RNG state stays single-threaded in
    /// [`Self::sample_table`], only the already-drawn table is evaluated in
    /// parallel, and `collect` preserves sample order.
    #[allow(clippy::too_many_arguments)]
    pub fn analyze(
        &mut self,
        tolerances: &[ComponentTolerance],
        m: usize,
        builder: impl Fn(&[f64]) -> Result<TwoPort, RfError> + Sync,
        z0_system: C,
        z_load: C,
        correlation: Option<&Array2<f64>>,
    ) -> Result<MonteCarloResult, MonteCarloError> {
        debug!("monte-carlo analyze: {} components, {} samples", tolerances.len(), m);
        let table = self.sample_table(tolerances, m, correlation)?;

        let evaluated: Vec<(C, SParams)> = table
            .par_iter()
            .enumerate()
            .map(|(index, row)| {
                let network = builder(row).map_err(|source| MonteCarloError::BuilderFailed {
                    index,
                    source: Box::new(source),
                })?;
                let z_in =
                    network.input_impedance(z_load).map_err(|e| MonteCarloError::BuilderFailed {
                        index,
                        source: Box::new(RfError::from(e)),
                    })?;
                let s =
                    network.to_s_parameters(z0_system).map_err(|e| MonteCarloError::BuilderFailed {
                        index,
                        source: Box::new(RfError::from(e)),
                    })?;
                Ok((z_in, s))
            })
            .collect::<Result<Vec<_>, MonteCarloError>>()?;

        let mut result = MonteCarloResult::with_capacity(m);
        for ((z_in, s), row) in evaluated.into_iter().zip(table.into_iter()) {
            result.impedances.push(z_in);
            result.s_params.push(s);
            result.samples.push(row);
        }
        Ok(result)
    }

    /// Sweep temperature over `[temp_start_c, temp_stop_c]` in `t_steps`
    /// steps; at each step, adjust every component's nominal by
    /// `μ' = μ·(1 + ppm·(T - 25)/1e6)` (`ppm` given per tolerance, same
    /// order as `tolerances`) and run [`Self::analyze`] with
    /// `⌈m_total/t_steps⌉` samples. Returns one result with concatenated
    /// impedances; statistics should be recomputed over the aggregate via
    /// [`MonteCarloResult::impedance_statistics`].
    #[allow(clippy::too_many_arguments)]
    pub fn analyze_temperature(
        &mut self,
        tolerances: &[ComponentTolerance],
        ppm_per_component: &[f64],
        temp_start_c: f64,
        temp_stop_c: f64,
        t_steps: usize,
        m_total: usize,
        builder: impl Fn(&[f64]) -> Result<TwoPort, RfError> + Sync,
        z0_system: C,
        z_load: C,
        correlation: Option<&Array2<f64>>,
    ) -> Result<MonteCarloResult, MonteCarloError> {
        if t_steps == 0 {
            return Err(MonteCarloError::InvalidDistribution(
                "temperature analysis requires at least one step".into(),
            ));
        }
        let samples_per_step = (m_total as f64 / t_steps as f64).ceil() as usize;
        let mut aggregate = MonteCarloResult::with_capacity(m_total);

        for step in 0..t_steps {
            let temp_c = if t_steps == 1 {
                temp_start_c
            } else {
                temp_start_c + (temp_stop_c - temp_start_c) * step as f64 / (t_steps - 1) as f64
            };
            let adjusted: Vec<ComponentTolerance> = tolerances
                .iter()
                .zip(ppm_per_component.iter())
                .map(|(tol, ppm)| {
                    let mut t = *tol;
                    t.nominal *= 1.0 + ppm * (temp_c - 25.0) / 1.0e6;
                    t
                })
                .collect();

            let step_result =
                self.analyze(&adjusted, samples_per_step, &builder, z0_system, z_load, correlation)?;
            aggregate.impedances.extend(step_result.impedances);
            aggregate.s_params.extend(step_result.s_params);
            aggregate.samples.extend(step_result.samples);
        }

        Ok(aggregate)
    }
}
