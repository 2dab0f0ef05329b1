// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for the component library.

use thiserror::Error;

use crate::twoport::TwoPortError;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ComponentError {
    /// A constructor received a negative resistance, inductance or
    /// capacitance.
    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    /// A constructor received a non-positive value where a strictly
    /// positive one is required (e.g. an inductance or capacitance, or a
    /// velocity factor).
    #[error("{what} must be strictly positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    /// A reactive component (L or C) was constructed at a non-positive
    /// frequency.
    #[error("{what} requires a positive frequency, got {hz} Hz")]
    NonPositiveFrequency { what: &'static str, hz: f64 },

    /// A stub or transmission-line expression was evaluated exactly at one
    /// of its electrical-length singularities (`βℓ = kπ` or `(k+1/2)π`).
    #[error("{0}: electrical length at an exact singularity")]
    Singular(&'static str),
}

impl From<TwoPortError> for ComponentError {
    fn from(e: TwoPortError) -> Self {
        match e {
            TwoPortError::Singular(op) => ComponentError::Singular(op),
            TwoPortError::Nonsymmetric => ComponentError::Singular("characteristic_impedance"),
        }
    }
}
