// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Filter-prototype composite helpers.

use crate::constants::TAU;
use crate::twoport::TwoPort;

use super::error::ComponentError;
use super::lumped::{series_inductor, shunt_capacitor};

/// 3rd-order Butterworth LC low-pass prototype (L-shunt-C-L), cutoff
/// `fc_hz`, system impedance `z0_ohms`, evaluated at `frequency_hz`.
///
/// `L1 = L3 = 0.7654·Z0/ωc`, `C2 = 1.8478/(Z0·ωc)`.
pub fn butterworth_lc_lowpass_3(
    z0_ohms: f64,
    fc_hz: f64,
    frequency_hz: f64,
) -> Result<TwoPort, ComponentError> {
    if fc_hz <= 0.0 {
        return Err(ComponentError::NonPositive {
            what: "butterworth_lc_lowpass_3.fc_hz",
            value: fc_hz,
        });
    }
    let omega_c = TAU * fc_hz;
    let l13 = 0.7654 * z0_ohms / omega_c;
    let c2 = 1.8478 / (z0_ohms * omega_c);

    let l1 = series_inductor(l13, frequency_hz)?;
    let c2 = shunt_capacitor(c2, frequency_hz)?;
    let l3 = series_inductor(l13, frequency_hz)?;
    Ok(l1.cascade(&c2).cascade(&l3))
}
