// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The complex scalar used throughout this crate, and a handful of small
//! helpers around it.

pub use num_complex::Complex64;

/// Double-precision complex scalar. Every voltage, current, impedance,
/// admittance and S-parameter entry in this crate is a `C`.
pub type C = Complex64;

/// `true` if both the real and imaginary parts are finite (no NaN, no Inf).
#[inline]
pub fn is_finite(z: C) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

/// `true` if `z`'s magnitude is below the universal denominator guard.
#[inline]
pub fn is_near_zero(z: C, eps: f64) -> bool {
    z.norm() < eps
}

/// A real-valued complex scalar, for convenience at call sites that build
/// purely-resistive or purely-reactive quantities.
#[inline]
pub fn real(re: f64) -> C {
    C::new(re, 0.0)
}

/// A purely-imaginary complex scalar.
#[inline]
pub fn imag(im: f64) -> C {
    C::new(0.0, im)
}
