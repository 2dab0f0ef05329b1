// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lossless L-match, transforming a low real impedance up to a high real
//! impedance with a single reactive pair.

use crate::constants::TAU;
use crate::twoport::TwoPort;

use super::error::ComponentError;
use super::lumped::{series_capacitor, series_inductor, shunt_capacitor, shunt_inductor};

fn q_factor(z_lo_ohms: f64, z_hi_ohms: f64) -> Result<f64, ComponentError> {
    if z_lo_ohms <= 0.0 {
        return Err(ComponentError::NonPositive {
            what: "l_match.z_lo_ohms",
            value: z_lo_ohms,
        });
    }
    if z_hi_ohms <= z_lo_ohms {
        return Err(ComponentError::NonPositive {
            what: "l_match.z_hi_ohms (must exceed z_lo_ohms)",
            value: z_hi_ohms,
        });
    }
    Ok((z_hi_ohms / z_lo_ohms - 1.0).sqrt())
}

/// Low-pass L-match: series L on the low-impedance side, shunt C on the
/// high-impedance side.
pub fn l_match_low_pass(
    z_lo_ohms: f64,
    z_hi_ohms: f64,
    frequency_hz: f64,
) -> Result<TwoPort, ComponentError> {
    let q = q_factor(z_lo_ohms, z_hi_ohms)?;
    let omega = TAU * frequency_hz;
    let l = q * z_lo_ohms / omega;
    let c = q / (omega * z_hi_ohms);
    let series_l = series_inductor(l, frequency_hz)?;
    let shunt_c = shunt_capacitor(c, frequency_hz)?;
    Ok(series_l.cascade(&shunt_c))
}

/// High-pass L-match: series C on the low-impedance side, shunt L on the
/// high-impedance side.
pub fn l_match_high_pass(
    z_lo_ohms: f64,
    z_hi_ohms: f64,
    frequency_hz: f64,
) -> Result<TwoPort, ComponentError> {
    let q = q_factor(z_lo_ohms, z_hi_ohms)?;
    let omega = TAU * frequency_hz;
    let c = 1.0 / (omega * q * z_lo_ohms);
    let l = z_hi_ohms / (omega * q);
    let series_c = series_capacitor(c, frequency_hz)?;
    let shunt_l = shunt_inductor(l, frequency_hz)?;
    Ok(series_c.cascade(&shunt_l))
}
