// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. This crate should do as many
calculations as possible in double precision before converting to a lower
precision, if that is ever required.
*/

pub use std::f64::consts::{PI, TAU};

/// The universal denominator guard. Any complex denominator whose magnitude
/// falls below this is treated as exactly zero and raises `Singular` rather
/// than letting the division produce an enormous or infinite value.
pub const DENOM_EPS: f64 = 1e-20;

/// The default tolerance used by the reciprocal/symmetric/lossless
/// predicates and by round-trip property tests, when the caller does not
/// supply their own `epsilon`.
pub const DEFAULT_EPS: f64 = 1e-10;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;

/// Vacuum permeability, H/m.
pub const MU_0: f64 = 1.256_637_062_12e-6;

/// Vacuum permittivity, F/m.
pub const EPSILON_0: f64 = 8.854_187_818_8e-12;

/// The floor below which a Monte-Carlo sample of a physical (always-positive)
/// component value is snapped up, expressed as a fraction of the nominal
/// value. See the Monte-Carlo engine's sample generation contract.
pub const MONTE_CARLO_POSITIVE_FLOOR_FRACTION: f64 = 0.01;

/// Hard cap on the number of adaptively-interpolated points inserted between
/// two consecutive Smith-chart samples.
pub const SMITH_CHART_MAX_INTERPOLATED_POINTS: usize = 20;

/// "Open circuit" surrogate impedance (real, very large) used by
/// `open_terminated` shunt-tee helpers and wherever a load needs to behave
/// as an open without producing an actual infinity.
pub const OPEN_CIRCUIT_IMPEDANCE_OHMS: f64 = 1e12;
