// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for the two-port algebra.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TwoPortError {
    /// A denominator fell below the universal guard (`1e-20` in magnitude).
    /// Carries the operation name for diagnostics.
    #[error("singular two-port operation ({0}): denominator magnitude below 1e-20")]
    Singular(&'static str),

    /// `characteristic_impedance` was requested of a network that is not
    /// symmetric at the library's default tolerance.
    #[error("characteristic_impedance requested of a non-symmetric network")]
    Nonsymmetric,
}
