// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;

use super::*;
use crate::complex::real;

#[test]
fn matched_load_has_zero_return_loss_mismatch() {
    let s = SParams::new(real(0.0), real(1.0), real(1.0), real(0.0));
    assert!(s.return_loss_db().is_infinite());
    assert_relative_eq!(s.vswr(), 1.0, epsilon = 1e-12);
}

#[test]
fn vswr_two_to_one_mismatch() {
    // |S11| = 1/3 -> VSWR = 2.
    let s = SParams::new(real(1.0 / 3.0), real(0.0), real(0.0), real(0.0));
    assert_relative_eq!(s.vswr(), 2.0, epsilon = 1e-10);
}

#[test]
fn insertion_loss_of_half_power_transmission() {
    let s21 = real(std::f64::consts::FRAC_1_SQRT_2);
    let s = SParams::new(real(0.0), real(0.0), s21, real(0.0));
    assert_relative_eq!(s.insertion_loss_db(), 3.0103, epsilon = 1e-3);
}
