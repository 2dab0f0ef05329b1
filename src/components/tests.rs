// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::complex::real;

#[test]
fn series_inductor_is_purely_reactive_and_reciprocal() {
    let t = series_inductor(10e-9, 1e9).unwrap();
    assert_relative_eq!(t.a().re, 1.0, epsilon = 1e-12);
    assert_relative_eq!(t.b().re, 0.0, epsilon = 1e-9);
    assert!(t.b().im > 0.0);
    assert!(t.is_reciprocal(1e-10));
}

#[test]
fn series_capacitor_rejects_non_positive_frequency() {
    assert_eq!(
        series_capacitor(1e-12, 0.0),
        Err(ComponentError::NonPositiveFrequency {
            what: "series_capacitor",
            hz: 0.0
        })
    );
}

#[test]
fn series_resistor_rejects_negative_value() {
    assert_eq!(
        series_resistor(-1.0),
        Err(ComponentError::Negative {
            what: "series_resistor.r",
            value: -1.0
        })
    );
}

// Scenario 3 of spec.md §8: quarter-wave 50 ohm line at 1 GHz loaded with
// 100 ohms transforms the load down to 25 ohms.
#[test]
fn scenario_quarter_wave_line_transforms_impedance() {
    let t = quarter_wave_line(50.0, 1e9, 1.0).unwrap();
    assert_relative_eq!(t.a().re, 0.0, epsilon = 1e-6);
    assert_relative_eq!(t.d().re, 0.0, epsilon = 1e-6);
    assert_relative_eq!(t.b().norm(), 50.0, epsilon = 1e-3);
    assert_relative_eq!(t.c().norm(), 1.0 / 50.0, epsilon = 1e-5);
    assert!(t.is_reciprocal(1e-6));

    let z_in = t.input_impedance(real(100.0)).unwrap();
    assert_relative_eq!(z_in.re, 25.0, epsilon = 1.0);
    assert_relative_eq!(z_in.im, 0.0, epsilon = 1.0);
}

#[test]
fn series_open_stub_singular_at_half_wavelength() {
    // βℓ = π is an exact cot() singularity.
    let err = series_open_stub(50.0, std::f64::consts::PI).unwrap_err();
    assert_eq!(err, ComponentError::Singular("series_open_stub"));
}

#[test]
fn series_short_stub_singular_at_quarter_wavelength() {
    let err = series_short_stub(50.0, FRAC_PI_2).unwrap_err();
    assert_eq!(err, ComponentError::Singular("series_short_stub"));
}

#[test]
fn shunt_tee_saturates_near_short_instead_of_dividing_by_zero() {
    // A series-zero-impedance network presents Z_in = Z_t always; drive
    // Z_t to zero so input_impedance itself is (numerically) near-zero.
    let net = series_impedance(real(0.0));
    let result = shunt_tee(&net, real(1e-30)).unwrap();
    assert!(result.c().norm() > 1e10);
}

#[test]
fn pi_attenuator_is_reciprocal_and_symmetric() {
    let t = attenuators::pi_attenuator(50.0, 10.0).unwrap();
    assert!(t.is_reciprocal(1e-9));
    assert!(t.is_symmetric(1e-9));
}

#[test]
fn t_attenuator_matches_pi_attenuator_insertion_loss() {
    let pi = attenuators::pi_attenuator(50.0, 6.0).unwrap();
    let t = attenuators::t_attenuator(50.0, 6.0).unwrap();
    let s_pi = pi.to_s_parameters(real(50.0)).unwrap();
    let s_t = t.to_s_parameters(real(50.0)).unwrap();
    assert_relative_eq!(s_pi.insertion_loss_db(), s_t.insertion_loss_db(), epsilon = 1e-6);
    assert_relative_eq!(s_pi.insertion_loss_db(), 6.0, epsilon = 1e-6);
}

#[test]
fn butterworth_lowpass_is_deep_at_twice_cutoff() {
    let t = filters::butterworth_lc_lowpass_3(50.0, 1e9, 2e9).unwrap();
    let s = t.to_s_parameters(real(50.0)).unwrap();
    assert!(s.insertion_loss_db() > 10.0);
}

#[test]
fn l_match_low_pass_presents_real_input_impedance_at_design_point() {
    let t = lmatch::l_match_low_pass(10.0, 50.0, 100e6).unwrap();
    let z_in = t.input_impedance(real(50.0)).unwrap();
    assert_relative_eq!(z_in.re, 10.0, epsilon = 1e-6);
    assert_relative_eq!(z_in.im, 0.0, epsilon = 1e-6);
}
