// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lumped-element constructors: bare series/shunt primitives, the R/L/C
//! family, the ideal transformer, and series/shunt RLC.

use crate::complex::{real, C};
use crate::constants::TAU;
use crate::twoport::TwoPort;

use super::error::ComponentError;

/// `[[1, Z], [0, 1]]`.
pub fn series_impedance(z: C) -> TwoPort {
    TwoPort::new(C::new(1.0, 0.0), z, C::new(0.0, 0.0), C::new(1.0, 0.0))
}

/// `[[1, 0], [Y, 1]]`.
pub fn shunt_admittance(y: C) -> TwoPort {
    TwoPort::new(C::new(1.0, 0.0), C::new(0.0, 0.0), y, C::new(1.0, 0.0))
}

fn require_non_negative(what: &'static str, value: f64) -> Result<(), ComponentError> {
    if value < 0.0 {
        return Err(ComponentError::Negative { what, value });
    }
    Ok(())
}

fn require_positive(what: &'static str, value: f64) -> Result<(), ComponentError> {
    if value <= 0.0 {
        return Err(ComponentError::NonPositive { what, value });
    }
    Ok(())
}

fn require_positive_frequency(what: &'static str, hz: f64) -> Result<(), ComponentError> {
    if hz <= 0.0 {
        return Err(ComponentError::NonPositiveFrequency { what, hz });
    }
    Ok(())
}

/// Series resistor, `Z = R`. `R >= 0`.
pub fn series_resistor(r_ohms: f64) -> Result<TwoPort, ComponentError> {
    require_non_negative("series_resistor.r", r_ohms)?;
    Ok(series_impedance(real(r_ohms)))
}

/// Series inductor, `Z = jωL`. `L > 0`.
pub fn series_inductor(l_henries: f64, frequency_hz: f64) -> Result<TwoPort, ComponentError> {
    require_positive("series_inductor.l", l_henries)?;
    let omega = TAU * frequency_hz;
    Ok(series_impedance(C::new(0.0, omega * l_henries)))
}

/// Series capacitor, `Z = 1/(jωC) = -j/(ωC)`. `C > 0`, `ω > 0`.
pub fn series_capacitor(c_farads: f64, frequency_hz: f64) -> Result<TwoPort, ComponentError> {
    require_positive("series_capacitor.c", c_farads)?;
    require_positive_frequency("series_capacitor", frequency_hz)?;
    let omega = TAU * frequency_hz;
    Ok(series_impedance(C::new(0.0, -1.0 / (omega * c_farads))))
}

/// Shunt resistor, `Y = 1/R`. `R > 0`.
pub fn shunt_resistor(r_ohms: f64) -> Result<TwoPort, ComponentError> {
    require_positive("shunt_resistor.r", r_ohms)?;
    Ok(shunt_admittance(real(1.0 / r_ohms)))
}

/// Shunt inductor, `Y = -j/(ωL)`. `L > 0`, `ω > 0`.
pub fn shunt_inductor(l_henries: f64, frequency_hz: f64) -> Result<TwoPort, ComponentError> {
    require_positive("shunt_inductor.l", l_henries)?;
    require_positive_frequency("shunt_inductor", frequency_hz)?;
    let omega = TAU * frequency_hz;
    Ok(shunt_admittance(C::new(0.0, -1.0 / (omega * l_henries))))
}

/// Shunt capacitor, `Y = jωC`. `C > 0`.
pub fn shunt_capacitor(c_farads: f64, frequency_hz: f64) -> Result<TwoPort, ComponentError> {
    require_positive("shunt_capacitor.c", c_farads)?;
    let omega = TAU * frequency_hz;
    Ok(shunt_admittance(C::new(0.0, omega * c_farads)))
}

/// Ideal transformer, `[[n, 0], [0, 1/n]]`. `n > 0`.
pub fn ideal_transformer(turns_ratio: f64) -> Result<TwoPort, ComponentError> {
    require_positive("ideal_transformer.n", turns_ratio)?;
    Ok(TwoPort::new(
        real(turns_ratio),
        C::new(0.0, 0.0),
        C::new(0.0, 0.0),
        real(1.0 / turns_ratio),
    ))
}

/// Series RLC section, `Z = R + jωL - j/(ωC)`. `R, L, C > 0`.
pub fn series_rlc(
    r_ohms: f64,
    l_henries: f64,
    c_farads: f64,
    frequency_hz: f64,
) -> Result<TwoPort, ComponentError> {
    require_positive("series_rlc.r", r_ohms)?;
    require_positive("series_rlc.l", l_henries)?;
    require_positive("series_rlc.c", c_farads)?;
    require_positive_frequency("series_rlc", frequency_hz)?;
    let omega = TAU * frequency_hz;
    let z = C::new(r_ohms, omega * l_henries - 1.0 / (omega * c_farads));
    Ok(series_impedance(z))
}

/// Shunt RLC section, `Y = 1/R + jωC - j/(ωL)`. `R, L, C > 0`.
pub fn shunt_rlc(
    r_ohms: f64,
    l_henries: f64,
    c_farads: f64,
    frequency_hz: f64,
) -> Result<TwoPort, ComponentError> {
    require_positive("shunt_rlc.r", r_ohms)?;
    require_positive("shunt_rlc.l", l_henries)?;
    require_positive("shunt_rlc.c", c_farads)?;
    require_positive_frequency("shunt_rlc", frequency_hz)?;
    let omega = TAU * frequency_hz;
    let y = C::new(1.0 / r_ohms, omega * c_farads - 1.0 / (omega * l_henries));
    Ok(shunt_admittance(y))
}
