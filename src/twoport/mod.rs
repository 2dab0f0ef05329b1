// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ABCD (chain) two-port value and its algebra: cascade composition,
//! terminal quantities, and the conversions to/from S/Z/Y parameter
//! bundles.
//!
//! A [`TwoPort`] is the single type that flows through every other module
//! in this crate. Component constructors produce one; sweeps and
//! Monte-Carlo analysis cascade and query them; nothing downstream needs to
//! know which component kind produced a given value.

mod error;

pub use error::TwoPortError;

use std::ops::Mul;

use log::trace;

use crate::complex::C;
use crate::params::{SParams, YParams, ZParams};
use crate::validation::{is_singular, is_singular_real};

/// The ABCD (chain) matrix relating port-1 voltage/current to port-2
/// voltage/current: `[V1, I1]ᵀ = [[A,B],[C,D]] · [V2, -I2]ᵀ`.
///
/// Immutable once constructed; passivity and reciprocity are not enforced by
/// the type, only queried.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoPort {
    a: C,
    b: C,
    c: C,
    d: C,
}

impl TwoPort {
    /// Construct from four complex entries. No validation is performed here
    /// beyond what the caller already guaranteed; component constructors are
    /// responsible for rejecting non-physical parameters before this point.
    pub fn new(a: C, b: C, c: C, d: C) -> Self {
        Self { a, b, c, d }
    }

    /// The two-sided unit of cascade composition.
    pub fn identity() -> Self {
        Self::new(C::new(1.0, 0.0), C::new(0.0, 0.0), C::new(0.0, 0.0), C::new(1.0, 0.0))
    }

    pub fn a(&self) -> C {
        self.a
    }
    pub fn b(&self) -> C {
        self.b
    }
    pub fn c(&self) -> C {
        self.c
    }
    pub fn d(&self) -> C {
        self.d
    }

    /// `AD - BC`.
    pub fn determinant(&self) -> C {
        self.a * self.d - self.b * self.c
    }

    /// Cascade this two-port with `other`, i.e. `self ⊗ other`: `self`'s
    /// port 2 feeds `other`'s port 1.
    pub fn cascade(&self, other: &TwoPort) -> TwoPort {
        TwoPort::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
        )
    }

    /// `true` iff `|det - 1| < eps`.
    pub fn is_reciprocal(&self, eps: f64) -> bool {
        (self.determinant() - C::new(1.0, 0.0)).norm() < eps
    }

    /// `true` iff `|A - D| < eps`.
    pub fn is_symmetric(&self, eps: f64) -> bool {
        (self.a - self.d).norm() < eps
    }

    /// `true` iff `A, D` are purely real, `B, C` purely imaginary (each part
    /// within `eps` of its ideal), and `||det| - 1| < eps`.
    pub fn is_lossless(&self, eps: f64) -> bool {
        self.a.im.abs() < eps
            && self.d.im.abs() < eps
            && self.b.re.abs() < eps
            && self.c.re.abs() < eps
            && (self.determinant().norm() - 1.0).abs() < eps
    }

    /// `Z_in = (A·Z_L + B) / (C·Z_L + D)`.
    pub fn input_impedance(&self, z_load: C) -> Result<C, TwoPortError> {
        let den = self.c * z_load + self.d;
        if is_singular(den) {
            trace!("input_impedance: denominator {den} below guard");
            return Err(TwoPortError::Singular("input_impedance"));
        }
        Ok((self.a * z_load + self.b) / den)
    }

    /// `Z_out = (D·Z_S + B) / (C·Z_S + A)`.
    pub fn output_impedance(&self, z_source: C) -> Result<C, TwoPortError> {
        let den = self.c * z_source + self.a;
        if is_singular(den) {
            trace!("output_impedance: denominator {den} below guard");
            return Err(TwoPortError::Singular("output_impedance"));
        }
        Ok((self.d * z_source + self.b) / den)
    }

    /// `sqrt(B/C)`, defined only for symmetric networks.
    pub fn characteristic_impedance(&self, eps: f64) -> Result<C, TwoPortError> {
        if !self.is_symmetric(eps) {
            return Err(TwoPortError::Nonsymmetric);
        }
        if is_singular(self.c) {
            return Err(TwoPortError::Singular("characteristic_impedance"));
        }
        Ok((self.b / self.c).sqrt())
    }

    /// `V2/V1 = 1 / (A + B/Z_L)` under load `Z_L`, evaluated as
    /// `Z_L / (A·Z_L + B)` so it stays well-defined (and correctly goes to
    /// zero) as `Z_L -> 0` instead of dividing by a vanishing load first.
    pub fn voltage_gain(&self, z_load: C) -> Result<C, TwoPortError> {
        let den = self.a * z_load + self.b;
        if is_singular(den) {
            return Err(TwoPortError::Singular("voltage_gain"));
        }
        Ok(z_load / den)
    }

    /// `I2/I1 = 1 / (C·Z_L + D)` under load `Z_L`.
    pub fn current_gain(&self, z_load: C) -> Result<C, TwoPortError> {
        let den = self.c * z_load + self.d;
        if is_singular(den) {
            return Err(TwoPortError::Singular("current_gain"));
        }
        Ok(C::new(1.0, 0.0) / den)
    }

    /// Power gain delivered to `Z_load` under that same load:
    /// `|V2/V1|² · Re(Z_load) / Re(Z_in)`.
    pub fn power_gain(&self, z_load: C) -> Result<f64, TwoPortError> {
        let vg = self.voltage_gain(z_load)?;
        let z_in = self.input_impedance(z_load)?;
        if is_singular_real(z_in.re) {
            return Err(TwoPortError::Singular("power_gain"));
        }
        Ok(vg.norm_sqr() * z_load.re / z_in.re)
    }

    /// ABCD -> S at reference impedance `z0` (real or complex).
    pub fn to_s_parameters(&self, z0: C) -> Result<SParams, TwoPortError> {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let den = a + b / z0 + c * z0 + d;
        if is_singular(den) {
            return Err(TwoPortError::Singular("to_s_parameters"));
        }
        let det = self.determinant();
        let s11 = (a + b / z0 - c * z0 - d) / den;
        let s12 = (C::new(2.0, 0.0) * det) / den;
        let s21 = C::new(2.0, 0.0) / den;
        let s22 = (-a + b / z0 - c * z0 + d) / den;
        Ok(SParams::new(s11, s12, s21, s22))
    }

    /// ABCD -> Z. Requires `|C| >= 1e-20`.
    pub fn to_z_parameters(&self) -> Result<ZParams, TwoPortError> {
        if is_singular(self.c) {
            return Err(TwoPortError::Singular("to_z_parameters"));
        }
        let det = self.determinant();
        Ok(ZParams::new(
            self.a / self.c,
            det / self.c,
            C::new(1.0, 0.0) / self.c,
            self.d / self.c,
        ))
    }

    /// ABCD -> Y. Requires `|B| >= 1e-20`.
    pub fn to_y_parameters(&self) -> Result<YParams, TwoPortError> {
        if is_singular(self.b) {
            return Err(TwoPortError::Singular("to_y_parameters"));
        }
        let det = self.determinant();
        Ok(YParams::new(
            self.d / self.b,
            -det / self.b,
            C::new(-1.0, 0.0) / self.b,
            self.a / self.b,
        ))
    }

    /// S -> ABCD (inverse of [`TwoPort::to_s_parameters`]). Requires
    /// `|S21| >= 1e-20`.
    pub fn from_s_parameters(s: &SParams, z0: C) -> Result<TwoPort, TwoPortError> {
        let two_s21 = C::new(2.0, 0.0) * s.s21;
        if is_singular(two_s21) {
            return Err(TwoPortError::Singular("from_s_parameters"));
        }
        let one = C::new(1.0, 0.0);
        let cross = s.s12 * s.s21;
        let a = ((one + s.s11) * (one - s.s22) + cross) / two_s21;
        let b = z0 * ((one + s.s11) * (one + s.s22) - cross) / two_s21;
        let c = ((one - s.s11) * (one - s.s22) - cross) / (two_s21 * z0);
        let d = ((one - s.s11) * (one + s.s22) + cross) / two_s21;
        Ok(TwoPort::new(a, b, c, d))
    }
}

impl Mul for TwoPort {
    type Output = TwoPort;
    fn mul(self, rhs: TwoPort) -> TwoPort {
        self.cascade(&rhs)
    }
}

impl Mul for &TwoPort {
    type Output = TwoPort;
    fn mul(self, rhs: &TwoPort) -> TwoPort {
        self.cascade(rhs)
    }
}
