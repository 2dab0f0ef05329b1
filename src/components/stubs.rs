// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The four lossless transmission-line stub variants. Each is built from
//! the open/short input-impedance (or input-admittance) expression of an
//! ideal line and placed either in series or in shunt.
//!
//! Near `βℓ = kπ/2` the underlying `tan`/`cot` explodes; the contract is to
//! raise [`ComponentError::Singular`] at the exact grid point (within
//! angular tolerance) and never produce a NaN in between.

use log::trace;

use crate::complex::{real, C};

use super::error::ComponentError;
use super::lumped::{series_impedance, shunt_admittance};
use crate::twoport::TwoPort;

/// How close `sin`/`cos` of the electrical length must come to zero before
/// the stub expression is considered to be sitting exactly on a
/// singularity, rather than merely large.
const ANGLE_SINGULAR_EPS: f64 = 1e-9;

fn cot(beta_l: f64, label: &'static str) -> Result<f64, ComponentError> {
    let s = beta_l.sin();
    if s.abs() < ANGLE_SINGULAR_EPS {
        trace!("{label}: cot(βℓ) singular at βℓ={beta_l}");
        return Err(ComponentError::Singular(label));
    }
    Ok(beta_l.cos() / s)
}

fn tan(beta_l: f64, label: &'static str) -> Result<f64, ComponentError> {
    let c = beta_l.cos();
    if c.abs() < ANGLE_SINGULAR_EPS {
        trace!("{label}: tan(βℓ) singular at βℓ={beta_l}");
        return Err(ComponentError::Singular(label));
    }
    Ok(beta_l.sin() / c)
}

/// Series stub terminated in an open circuit: `Z = -j·Z0·cot(βℓ)`.
/// Singular at `βℓ = kπ`.
pub fn series_open_stub(z0_ohms: f64, beta_l: f64) -> Result<TwoPort, ComponentError> {
    let cot_val = cot(beta_l, "series_open_stub")?;
    Ok(series_impedance(C::new(0.0, -z0_ohms * cot_val)))
}

/// Series stub terminated in a short circuit: `Z = j·Z0·tan(βℓ)`.
/// Singular at `βℓ = (k+1/2)π`.
pub fn series_short_stub(z0_ohms: f64, beta_l: f64) -> Result<TwoPort, ComponentError> {
    let tan_val = tan(beta_l, "series_short_stub")?;
    Ok(series_impedance(C::new(0.0, z0_ohms * tan_val)))
}

/// Shunt stub terminated in an open circuit: `Y = j·tan(βℓ)/Z0`.
/// Singular at `βℓ = (k+1/2)π`.
pub fn shunt_open_stub(z0_ohms: f64, beta_l: f64) -> Result<TwoPort, ComponentError> {
    let tan_val = tan(beta_l, "shunt_open_stub")?;
    Ok(shunt_admittance(C::new(0.0, tan_val / z0_ohms)))
}

/// Shunt stub terminated in a short circuit: `Y = -j·cot(βℓ)/Z0`.
/// Singular at `βℓ = kπ`.
pub fn shunt_short_stub(z0_ohms: f64, beta_l: f64) -> Result<TwoPort, ComponentError> {
    let cot_val = cot(beta_l, "shunt_short_stub")?;
    Ok(shunt_admittance(C::new(0.0, -cot_val / z0_ohms)))
}

/// Given an arbitrary two-port `network` and a termination `z_t`, compute
/// the input admittance it presents and return the corresponding
/// shunt-admittance two-port `[[1,0],[y,1]]`.
///
/// When `|z| < 1e-20` the network looks like a near-short; rather than
/// dividing by (approximately) zero, the admittance saturates to a very
/// large real value, matching the documented "treat as near-short"
/// behaviour.
pub fn shunt_tee(network: &TwoPort, z_t: C) -> Result<TwoPort, ComponentError> {
    let z = network.input_impedance(z_t)?;
    let y = if z.norm() < 1e-20 {
        real(1e20)
    } else {
        C::new(1.0, 0.0) / z
    };
    Ok(shunt_admittance(y))
}

/// `shunt_tee` with the termination shorted (`Z_t = 0`).
pub fn short_terminated(network: &TwoPort) -> Result<TwoPort, ComponentError> {
    shunt_tee(network, real(0.0))
}

/// `shunt_tee` with the termination open (`Z_t` a very large real value).
pub fn open_terminated(network: &TwoPort) -> Result<TwoPort, ComponentError> {
    shunt_tee(network, real(crate::constants::OPEN_CIRCUIT_IMPEDANCE_OHMS))
}

/// `shunt_tee` with the termination matched to a real system impedance.
pub fn match_terminated(network: &TwoPort, z0_ohms: f64) -> Result<TwoPort, ComponentError> {
    shunt_tee(network, real(z0_ohms))
}
