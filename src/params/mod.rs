// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! S/Z/Y parameter bundles: 2x2 complex aggregates with the derived scalars
//! that make them useful on their own (return loss, insertion loss, VSWR).
//!
//! A bundle does not record the reference impedance it was computed
//! against; the caller is responsible for keeping that association, exactly
//! as `spec.md` §3 describes.

#[cfg(test)]
mod tests;

use crate::complex::C;

/// Scattering-parameter bundle, referenced to some `Z0` not recorded here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SParams {
    pub s11: C,
    pub s12: C,
    pub s21: C,
    pub s22: C,
}

impl SParams {
    pub fn new(s11: C, s12: C, s21: C, s22: C) -> Self {
        Self { s11, s12, s21, s22 }
    }

    /// `S11*S22 - S12*S21`.
    pub fn determinant(&self) -> C {
        self.s11 * self.s22 - self.s12 * self.s21
    }

    /// `-20 log10(|S11|)` dB. Tends to `+inf` as the match becomes perfect.
    pub fn return_loss_db(&self) -> f64 {
        -20.0 * self.s11.norm().log10()
    }

    /// `-20 log10(|S21|)` dB.
    pub fn insertion_loss_db(&self) -> f64 {
        -20.0 * self.s21.norm().log10()
    }

    /// `(1 + |S11|) / (1 - |S11|)`. Tends to `+inf` as `|S11| -> 1`.
    pub fn vswr(&self) -> f64 {
        vswr_from_gamma_magnitude(self.s11.norm())
    }
}

/// Impedance-parameter bundle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZParams {
    pub z11: C,
    pub z12: C,
    pub z21: C,
    pub z22: C,
}

impl ZParams {
    pub fn new(z11: C, z12: C, z21: C, z22: C) -> Self {
        Self { z11, z12, z21, z22 }
    }

    pub fn determinant(&self) -> C {
        self.z11 * self.z22 - self.z12 * self.z21
    }
}

/// Admittance-parameter bundle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YParams {
    pub y11: C,
    pub y12: C,
    pub y21: C,
    pub y22: C,
}

impl YParams {
    pub fn new(y11: C, y12: C, y21: C, y22: C) -> Self {
        Self { y11, y12, y21, y22 }
    }

    pub fn determinant(&self) -> C {
        self.y11 * self.y22 - self.y12 * self.y21
    }
}

/// `(1 + |Γ|) / (1 - |Γ|)`, shared by `SParams::vswr` and the Smith-chart
/// module so both compute VSWR the same way.
pub fn vswr_from_gamma_magnitude(gamma_mag: f64) -> f64 {
    (1.0 + gamma_mag) / (1.0 - gamma_mag)
}
