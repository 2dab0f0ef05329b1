// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resistive Pi and T attenuator pads.

use crate::complex::real;
use crate::twoport::TwoPort;

use super::error::ComponentError;
use super::lumped::{series_impedance, shunt_admittance};

fn voltage_ratio(attenuation_db: f64) -> Result<f64, ComponentError> {
    if attenuation_db <= 0.0 {
        return Err(ComponentError::NonPositive {
            what: "attenuator.attenuation_db",
            value: attenuation_db,
        });
    }
    Ok(10f64.powf(attenuation_db / 20.0))
}

/// Pi-pad attenuator: shunt R, series R, shunt R. `k = 10^(att_dB/20)`.
/// `R_shunt = Z0·(k+1)/(k-1)`, `R_series = Z0·(k²-1)/(2k)`.
pub fn pi_attenuator(z0_ohms: f64, attenuation_db: f64) -> Result<TwoPort, ComponentError> {
    let k = voltage_ratio(attenuation_db)?;
    let r_shunt = z0_ohms * (k + 1.0) / (k - 1.0);
    let r_series = z0_ohms * (k * k - 1.0) / (2.0 * k);
    let shunt = shunt_admittance(real(1.0 / r_shunt));
    let series = series_impedance(real(r_series));
    Ok(shunt.cascade(&series).cascade(&shunt))
}

/// T-pad attenuator: series R, shunt R, series R. Same `k`.
/// `R_series = Z0·(k-1)/(k+1)`, `R_shunt = 2·Z0·k/(k²-1)`.
pub fn t_attenuator(z0_ohms: f64, attenuation_db: f64) -> Result<TwoPort, ComponentError> {
    let k = voltage_ratio(attenuation_db)?;
    let r_series = z0_ohms * (k - 1.0) / (k + 1.0);
    let r_shunt = 2.0 * z0_ohms * k / (k * k - 1.0);
    let series = series_impedance(real(r_series));
    let shunt = shunt_admittance(real(1.0 / r_shunt));
    Ok(series.cascade(&shunt).cascade(&series))
}
