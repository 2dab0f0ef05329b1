// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all rf_cascade-related errors. This should be the *only*
//! error enum that is publicly visible; every subsystem error converts into
//! it.

use thiserror::Error;

use crate::{
    components::ComponentError, montecarlo::MonteCarloError, smithchart::SmithChartError,
    sweep::SweepError, twoport::TwoPortError,
};

/// The *only* publicly visible error from `rf_cascade`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RfError {
    /// A two-port algebra operation hit a degenerate denominator or a
    /// conversion that cannot be completed for the given inputs.
    #[error(transparent)]
    TwoPort(#[from] TwoPortError),

    /// A component constructor was given a non-physical parameter.
    #[error(transparent)]
    Component(#[from] ComponentError),

    /// A sweep descriptor or the builder it drives failed.
    #[error(transparent)]
    Sweep(#[from] SweepError),

    /// A Monte-Carlo sampler or analysis run failed.
    #[error(transparent)]
    MonteCarlo(#[from] MonteCarloError),

    /// The Smith-chart point generator failed.
    #[error(transparent)]
    SmithChart(#[from] SmithChartError),
}

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = std::result::Result<T, RfError>;
