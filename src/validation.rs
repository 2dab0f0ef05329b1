// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shared numeric guards used across the two-port algebra, the component
//! library and the Smith-chart generator, so the `1e-20` denominator rule
//! of the error-handling design is enforced in exactly one place.

use crate::complex::C;
use crate::constants::DENOM_EPS;

/// `true` when `den` is too small in magnitude to safely divide by.
#[inline]
pub fn is_singular(den: C) -> bool {
    den.norm() < DENOM_EPS
}

/// `true` when a real-valued denominator is too small in magnitude.
#[inline]
pub fn is_singular_real(den: f64) -> bool {
    den.abs() < DENOM_EPS
}

/// Clamp each coordinate of a reflection-coefficient-plane point into
/// `[-1, 1]`. This is the Smith-chart generator's hard output guarantee: it
/// holds even for impedances that map outside the unit disk (e.g. a
/// negative-resistance numerical artefact).
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(-1.0, 1.0)
}
