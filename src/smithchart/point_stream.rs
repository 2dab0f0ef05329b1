// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Point streams on the reflection-coefficient plane: the five input modes,
//! the adaptive refinement policy shared by all of them, and the enhanced
//! per-point `value`/`timestamp` fields used for animation.

use itertools::Itertools;
use log::trace;

use crate::complex::C;
use crate::constants::SMITH_CHART_MAX_INTERPOLATED_POINTS;
use crate::error::RfError;
use crate::sweep::FrequencySweep;
use crate::twoport::TwoPort;
use crate::validation::clamp_unit;

use super::config::SmithChartConfig;
use super::error::SmithChartError;
use super::impedance_to_reflection;

/// A flattened stream of reflection-coefficient points: `xy` holds two
/// consecutive reals (real, imaginary) per point, clamped to `[-1, 1]`
/// coordinatewise. `value` and `timestamp` carry one entry per point.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointStream {
    pub xy: Vec<f64>,
    pub value: Vec<f64>,
    pub timestamp: Vec<f64>,
}

impl PointStream {
    pub fn point_count(&self) -> usize {
        self.value.len()
    }

    fn from_points(points: Vec<C>, value: Vec<f64>) -> Self {
        let timestamp = (0..points.len()).map(|i| i as f64).collect();
        let xy = flatten_clamped(&points);
        Self { xy, value, timestamp }
    }
}

/// Metadata describing a named trace within a larger animated scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceMetadata {
    pub label: String,
    pub point_count: usize,
}

fn flatten_clamped(points: &[C]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(clamp_unit(p.re));
        out.push(clamp_unit(p.im));
    }
    out
}

/// Insert linearly-interpolated points between consecutive samples whenever
/// the chord length between them exceeds the average of their target
/// spacings, per `config`'s point-spacing policy. A no-op when
/// `config.adaptive` is `false`. `n = clamp(ceil(d/s̄) - 1, 0, 20)` points
/// are inserted per segment, their driving `value` interpolated linearly
/// alongside the point itself.
fn adaptive_refine(points: &[C], values: &[f64], config: &SmithChartConfig) -> (Vec<C>, Vec<f64>) {
    if !config.adaptive || points.len() < 2 {
        return (points.to_vec(), values.to_vec());
    }

    let mut out_points = Vec::with_capacity(points.len());
    let mut out_values = Vec::with_capacity(values.len());
    out_points.push(points[0]);
    out_values.push(values[0]);

    for ((g0, g1), (v0, v1)) in points.iter().copied().tuple_windows().zip(values.iter().copied().tuple_windows()) {
        let d = (g1 - g0).norm();
        let s_bar = (config.spacing_at(g0.norm()) + config.spacing_at(g1.norm())) / 2.0;

        if d > s_bar && s_bar > 0.0 {
            let n = (((d / s_bar).ceil() as i64 - 1).clamp(0, SMITH_CHART_MAX_INTERPOLATED_POINTS as i64))
                as usize;
            for i in 1..=n {
                let t = i as f64 / (n + 1) as f64;
                out_points.push(g0 + t * (g1 - g0));
                out_values.push(v0 + t * (v1 - v0));
            }
        }
        out_points.push(g1);
        out_values.push(v1);
    }

    (out_points, out_values)
}

/// Mode 1: evaluate `builder` at each sample of `sweep`, take `Z_in` under
/// `z_load`, map to `Γ`, and refine adaptively per `config`.
pub fn from_builder_and_frequency_sweep(
    builder: impl Fn(f64) -> Result<TwoPort, RfError>,
    sweep: &FrequencySweep,
    z0: f64,
    z_load: C,
    config: &SmithChartConfig,
) -> Result<PointStream, SmithChartError> {
    let freqs = sweep.values();
    trace!("smith-chart: builder + frequency sweep, {} samples", freqs.len());
    let mut points = Vec::with_capacity(freqs.len());

    for (index, f) in freqs.iter().enumerate() {
        let network = builder(*f).map_err(|source| SmithChartError::BuilderFailed {
            index,
            source: Box::new(source),
        })?;
        let z_in = network.input_impedance(z_load).map_err(|e| SmithChartError::BuilderFailed {
            index,
            source: Box::new(RfError::from(e)),
        })?;
        points.push(impedance_to_reflection(z_in, z0)?);
    }

    let (refined_points, refined_values) = adaptive_refine(&points, &freqs, config);
    Ok(PointStream::from_points(refined_points, refined_values))
}

/// Mode 2: a frequency-independent network. Per spec normalization, emits
/// the same `Γ` once per frequency sample, unrefined.
pub fn from_single_twoport_and_frequency_sweep(
    network: &TwoPort,
    sweep: &FrequencySweep,
    z0: f64,
    z_load: C,
) -> Result<PointStream, SmithChartError> {
    let freqs = sweep.values();
    let z_in = network.input_impedance(z_load).map_err(|e| SmithChartError::BuilderFailed {
        index: 0,
        source: Box::new(RfError::from(e)),
    })?;
    let gamma = impedance_to_reflection(z_in, z0)?;
    let points = vec![gamma; freqs.len()];
    Ok(PointStream::from_points(points, freqs))
}

/// Mode 3 (and its alias, mode 5): map each impedance in a list — typically
/// a Monte-Carlo scatter — to `Γ`, without interpolation.
pub fn from_impedance_list(impedances: &[C], z0: f64) -> Result<PointStream, SmithChartError> {
    let mut points = Vec::with_capacity(impedances.len());
    for z in impedances {
        points.push(impedance_to_reflection(*z, z0)?);
    }
    let values = (0..points.len()).map(|i| i as f64).collect();
    Ok(PointStream::from_points(points, values))
}

/// Mode 4: treat each element of `s11` as `Γ` directly (no bilinear map),
/// still subject to clamping and adaptive refinement between consecutive
/// samples.
pub fn from_s11_list(s11: &[C], config: &SmithChartConfig) -> PointStream {
    let values: Vec<f64> = (0..s11.len()).map(|i| i as f64).collect();
    let (refined_points, refined_values) = adaptive_refine(s11, &values, config);
    PointStream::from_points(refined_points, refined_values)
}
