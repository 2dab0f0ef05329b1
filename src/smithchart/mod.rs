// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Smith-chart point generator: the bilinear reflection-coefficient
//! mapping, a point-spacing policy for adaptive refinement, the five
//! sweep-to-point-stream input modes, and the 2-D mesh mode.
//!
//! Everything here operates in the reflection-coefficient plane against a
//! single real reference impedance `z0` — complex reference impedances are
//! a two-port-algebra concern ([`crate::twoport`]), not a Smith-chart one.

mod config;
mod error;
mod mesh;
mod point_stream;

pub use config::SmithChartConfig;
pub use error::SmithChartError;
pub use mesh::{mesh, SmithChartMesh};
pub use point_stream::{
    from_builder_and_frequency_sweep, from_impedance_list, from_s11_list,
    from_single_twoport_and_frequency_sweep, PointStream, TraceMetadata,
};

use crate::complex::C;
use crate::validation::is_singular_real;

/// `Γ = (Z - Z0) / (Z + Z0)`, for real `Z0`.
///
/// Fails [`SmithChartError::Singular`] when `Z = -Z0` exactly (the
/// denominator vanishes); this is the one impedance the bilinear map cannot
/// represent as a finite point, corresponding to `Γ = ∞`.
pub fn impedance_to_reflection(z: C, z0: f64) -> Result<C, SmithChartError> {
    let den = z + C::new(z0, 0.0);
    if is_singular_real(den.norm()) {
        return Err(SmithChartError::Singular("impedance_to_reflection"));
    }
    Ok((z - C::new(z0, 0.0)) / den)
}

/// The inverse bilinear map, `Z = Z0·(1 + Γ)/(1 - Γ)`.
///
/// Fails [`SmithChartError::Singular`] at `Γ = 1` exactly, the open-circuit
/// limit where the inverse would require dividing by zero.
pub fn reflection_to_impedance(gamma: C, z0: f64) -> Result<C, SmithChartError> {
    let den = C::new(1.0, 0.0) - gamma;
    if is_singular_real(den.norm()) {
        return Err(SmithChartError::Singular("reflection_to_impedance"));
    }
    Ok(C::new(z0, 0.0) * (C::new(1.0, 0.0) + gamma) / den)
}

/// Alias of [`from_impedance_list`] (mode 3): the spec names mode 5 as "an
/// impedance list with direct Γ conversion", identical to mode 3's
/// behaviour.
pub fn from_impedance_list_direct(impedances: &[C], z0: f64) -> Result<PointStream, SmithChartError> {
    from_impedance_list(impedances, z0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::complex::real;

    #[test]
    fn matched_load_maps_to_origin() {
        let g = impedance_to_reflection(real(50.0), 50.0).unwrap();
        assert_relative_eq!(g.re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(g.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn open_circuit_maps_to_unit_circle() {
        let g = impedance_to_reflection(real(1e12), 50.0).unwrap();
        assert_relative_eq!(g.re, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn negative_z0_load_is_singular() {
        assert!(impedance_to_reflection(real(-50.0), 50.0).is_err());
    }

    #[test]
    fn round_trip_impedance_reflection() {
        let z = C::new(37.0, -12.5);
        let g = impedance_to_reflection(z, 50.0).unwrap();
        let back = reflection_to_impedance(g, 50.0).unwrap();
        assert_relative_eq!(back.re, z.re, epsilon = 1e-9);
        assert_relative_eq!(back.im, z.im, epsilon = 1e-9);
    }

    #[test]
    fn gamma_at_unity_is_singular_on_inverse() {
        assert!(reflection_to_impedance(real(1.0), 50.0).is_err());
    }
}
