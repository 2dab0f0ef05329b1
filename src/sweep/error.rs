// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for sweep descriptors and executors.

use thiserror::Error;

use crate::error::RfError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// `num_points < 2`, `start == stop` with more than one point,
    /// non-positive `start` with log distribution, or non-positive
    /// frequency.
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    /// The network-builder raised an error at a specific sweep value; the
    /// sweep propagates it and abandons the remainder (no partial result).
    #[error("builder failed at sweep value {value}: {source}")]
    BuilderFailed { value: f64, source: Box<RfError> },
}
