// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sweep executors: drive a network-builder over a sweep descriptor's value
//! domain and collect terminal quantities in sweep order.

use log::trace;

use crate::complex::C;
use crate::components;
use crate::error::RfError;
use crate::params::SParams;
use crate::twoport::TwoPort;

use super::component_value::ComponentSweep;
use super::error::SweepError;
use super::frequency::FrequencySweep;

/// The collected result of [`perform_sweep`]. Arrays are parallel and in
/// sweep order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult {
    pub frequencies_hz: Vec<f64>,
    pub s_params: Vec<SParams>,
    pub z_in: Vec<C>,
    pub z_out: Vec<C>,
}

impl SweepResult {
    fn with_capacity(n: usize) -> Self {
        Self {
            frequencies_hz: Vec::with_capacity(n),
            s_params: Vec::with_capacity(n),
            z_in: Vec::with_capacity(n),
            z_out: Vec::with_capacity(n),
        }
    }

    /// `|S11|` in dB, per sample.
    pub fn s11_db(&self) -> Vec<f64> {
        self.s_params.iter().map(|s| 20.0 * s.s11.norm().log10()).collect()
    }

    /// `|S21|` in dB, per sample.
    pub fn s21_db(&self) -> Vec<f64> {
        self.s_params.iter().map(|s| 20.0 * s.s21.norm().log10()).collect()
    }

    /// VSWR at port 1, per sample.
    pub fn vswr(&self) -> Vec<f64> {
        self.s_params.iter().map(|s| s.vswr()).collect()
    }

    /// `arg(S11)` in degrees, per sample.
    pub fn s11_arg_deg(&self) -> Vec<f64> {
        self.s_params.iter().map(|s| s.s11.arg().to_degrees()).collect()
    }

    /// `arg(S21)` in degrees, per sample.
    pub fn s21_arg_deg(&self) -> Vec<f64> {
        self.s_params.iter().map(|s| s.s21.arg().to_degrees()).collect()
    }
}

fn wrap<T>(value: f64, result: Result<T, RfError>) -> Result<T, SweepError> {
    result.map_err(|source| SweepError::BuilderFailed { value, source: Box::new(source) })
}

/// Evaluate `builder` at each of `sweep`'s sample frequencies, collecting
/// `(f, S, Z_in, Z_out)`. Propagates the first error the builder (or a
/// derived-quantity computation) raises, together with the failing
/// frequency, and abandons the remainder of the sweep.
pub fn perform_sweep(
    builder: impl Fn(f64) -> Result<TwoPort, RfError>,
    sweep: &FrequencySweep,
    z0: C,
    z_load: C,
    z_source: C,
) -> Result<SweepResult, SweepError> {
    let freqs = sweep.values();
    trace!("perform_sweep: {} frequency samples", freqs.len());
    let mut result = SweepResult::with_capacity(freqs.len());

    for f in freqs {
        let network = wrap(f, builder(f))?;
        let z_in = wrap(f, network.input_impedance(z_load).map_err(RfError::from))?;
        let z_out = wrap(f, network.output_impedance(z_source).map_err(RfError::from))?;
        let s = wrap(f, network.to_s_parameters(z0).map_err(RfError::from))?;

        result.frequencies_hz.push(f);
        result.z_in.push(z_in);
        result.z_out.push(z_out);
        result.s_params.push(s);
    }

    Ok(result)
}

/// The collected result of [`perform_component_sweep`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentSweepResult {
    pub values: Vec<f64>,
    pub z_in: Vec<C>,
    pub y_in: Vec<C>,
    pub s_params: Vec<SParams>,
    pub reflection: Vec<C>,
}

/// Enumerate `sweep`'s value axis; for each value `vₖ`, construct the
/// primitive network of `sweep`'s [`ComponentKind`] at the sweep's fixed
/// frequency, optionally cascade `before ⊗ value_network ⊗ after`, and
/// collect `Z_in`, `Y_in = 1/Z_in`, S-parameters at `z0_system`, and the
/// reflection coefficient `Γₖ = (Z_in/Z0 - 1)/(Z_in/Z0 + 1)`.
pub fn perform_component_sweep(
    sweep: &ComponentSweep,
    z0_system: C,
    before: Option<&TwoPort>,
    after: Option<&TwoPort>,
    z_load: C,
) -> Result<ComponentSweepResult, SweepError> {
    let values = sweep.values();
    trace!("perform_component_sweep: {} value samples", values.len());
    let mut result = ComponentSweepResult {
        values: Vec::with_capacity(values.len()),
        z_in: Vec::with_capacity(values.len()),
        y_in: Vec::with_capacity(values.len()),
        s_params: Vec::with_capacity(values.len()),
        reflection: Vec::with_capacity(values.len()),
    };

    for v in values {
        let value_network = wrap(
            v,
            components::build(sweep.component_kind(), v, sweep.fixed_frequency_hz())
                .map_err(RfError::from),
        )?;
        let network = match (before, after) {
            (Some(b), Some(a)) => b.cascade(&value_network).cascade(a),
            (Some(b), None) => b.cascade(&value_network),
            (None, Some(a)) => value_network.cascade(a),
            (None, None) => value_network,
        };

        let z_in = wrap(v, network.input_impedance(z_load).map_err(RfError::from))?;
        let y_in = if z_in.norm() < 1e-20 {
            C::new(1e20, 0.0)
        } else {
            C::new(1.0, 0.0) / z_in
        };
        let s = wrap(v, network.to_s_parameters(z0_system).map_err(RfError::from))?;
        let gamma = (z_in / z0_system - C::new(1.0, 0.0)) / (z_in / z0_system + C::new(1.0, 0.0));

        result.values.push(v);
        result.z_in.push(z_in);
        result.y_in.push(y_in);
        result.s_params.push(s);
        result.reflection.push(gamma);
    }

    Ok(result)
}
