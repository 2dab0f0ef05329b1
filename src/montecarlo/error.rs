// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for tolerance distributions, the sampler, and temperature and
//! correlation analysis.

use thiserror::Error;

use crate::error::RfError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MonteCarloError {
    /// A tolerance was negative, or a reactive component was requested at
    /// zero frequency.
    #[error("invalid tolerance distribution: {0}")]
    InvalidDistribution(String),

    /// A correlation matrix's shape didn't match the component count, or it
    /// failed to admit a Cholesky factorization (not positive
    /// semi-definite).
    #[error("invalid correlation matrix: {0}")]
    InvalidCorrelation(String),

    /// The caller-supplied builder raised an error for a specific sample
    /// index; the analysis propagates it and abandons the remainder.
    #[error("builder failed at sample {index}: {source}")]
    BuilderFailed { index: usize, source: Box<RfError> },
}
