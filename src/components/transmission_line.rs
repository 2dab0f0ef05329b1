// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The transmission-line family: lossless or lossy, real or complex
//! characteristic impedance, plus the degrees-based convenience
//! constructor and a quarter-wave helper.

use crate::complex::{real, C};
use crate::constants::{EPSILON_0, MU_0, SPEED_OF_LIGHT_M_PER_S, TAU};
use crate::twoport::TwoPort;
use crate::validation::is_singular;

use super::error::ComponentError;

fn require_positive(what: &'static str, value: f64) -> Result<(), ComponentError> {
    if value <= 0.0 {
        return Err(ComponentError::NonPositive { what, value });
    }
    Ok(())
}

/// `β = ω·sqrt(μ₀ε₀) / vf`, the phase constant of a line with velocity
/// factor `vf`.
fn phase_constant(frequency_hz: f64, velocity_factor: f64) -> f64 {
    let omega = TAU * frequency_hz;
    omega * (MU_0 * EPSILON_0).sqrt() / velocity_factor
}

/// A general transmission line of length `length_m`, complex characteristic
/// impedance `z0c`, attenuation `alpha_np_per_m` (nepers/meter), operated at
/// `frequency_hz` with velocity factor `velocity_factor`.
///
/// `γ = α + jβ`; ABCD = `[[cosh(γℓ), Z0c·sinh(γℓ)], [sinh(γℓ)/Z0c, cosh(γℓ)]]`.
pub fn transmission_line(
    length_m: f64,
    z0c: C,
    frequency_hz: f64,
    velocity_factor: f64,
    alpha_np_per_m: f64,
) -> Result<TwoPort, ComponentError> {
    require_positive("transmission_line.frequency_hz", frequency_hz)?;
    if velocity_factor <= 0.0 || velocity_factor > 1.0 {
        return Err(ComponentError::NonPositive {
            what: "transmission_line.velocity_factor",
            value: velocity_factor,
        });
    }
    if length_m < 0.0 {
        return Err(ComponentError::Negative {
            what: "transmission_line.length_m",
            value: length_m,
        });
    }
    if is_singular(z0c) {
        return Err(ComponentError::Singular("transmission_line.z0c"));
    }

    let beta = phase_constant(frequency_hz, velocity_factor);
    let gamma = C::new(alpha_np_per_m, beta);
    let gl = gamma * length_m;
    let cosh_gl = gl.cosh();
    let sinh_gl = gl.sinh();

    Ok(TwoPort::new(cosh_gl, z0c * sinh_gl, sinh_gl / z0c, cosh_gl))
}

/// Convenience: lossless line with a real characteristic impedance.
pub fn lossless_line(
    length_m: f64,
    z0_ohms: f64,
    frequency_hz: f64,
    velocity_factor: f64,
) -> Result<TwoPort, ComponentError> {
    transmission_line(length_m, real(z0_ohms), frequency_hz, velocity_factor, 0.0)
}

/// Convenience: lossy line with real characteristic impedance and a loss
/// figure given in dB/meter, converted to nepers/meter via
/// `α = loss_db_per_m · ln(10) / 20`.
pub fn lossy_line_db_per_m(
    length_m: f64,
    z0_ohms: f64,
    frequency_hz: f64,
    velocity_factor: f64,
    loss_db_per_m: f64,
) -> Result<TwoPort, ComponentError> {
    let alpha_np_per_m = loss_db_per_m * std::f64::consts::LN_10 / 20.0;
    transmission_line(length_m, real(z0_ohms), frequency_hz, velocity_factor, alpha_np_per_m)
}

/// Convenience: construct a line from an electrical length in degrees
/// rather than a physical length in meters.
/// `ℓ = (θ/360) · (c / (f · vf))`.
pub fn line_from_electrical_length_deg(
    electrical_length_deg: f64,
    z0c: C,
    frequency_hz: f64,
    velocity_factor: f64,
    alpha_np_per_m: f64,
) -> Result<TwoPort, ComponentError> {
    require_positive("line_from_electrical_length_deg.frequency_hz", frequency_hz)?;
    if velocity_factor <= 0.0 || velocity_factor > 1.0 {
        return Err(ComponentError::NonPositive {
            what: "line_from_electrical_length_deg.velocity_factor",
            value: velocity_factor,
        });
    }
    let wavelength_m = SPEED_OF_LIGHT_M_PER_S / (frequency_hz * velocity_factor);
    let length_m = (electrical_length_deg / 360.0) * wavelength_m;
    transmission_line(length_m, z0c, frequency_hz, velocity_factor, alpha_np_per_m)
}

/// Quarter-wave line: electrical length fixed at 90 degrees, real `Z0`.
/// Useful as a building block for impedance-inverter and matching
/// constructions (e.g. `Z_in = Z0² / Z_load`).
pub fn quarter_wave_line(
    z0_ohms: f64,
    frequency_hz: f64,
    velocity_factor: f64,
) -> Result<TwoPort, ComponentError> {
    line_from_electrical_length_deg(90.0, real(z0_ohms), frequency_hz, velocity_factor, 0.0)
}
