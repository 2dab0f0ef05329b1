// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for the Smith-chart point generator.

use thiserror::Error;

use crate::error::RfError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmithChartError {
    /// The bilinear inverse (`reflection_to_impedance`) hit a denominator
    /// below `1e-20`, i.e. `Γ` at exactly `-1` against a real `Z0` the
    /// input-side transform can't invert.
    #[error("singular bilinear transform: {0}")]
    Singular(&'static str),

    /// A mesh or sweep-driven mode's builder raised an error at a specific
    /// grid point or sample; the generator propagates it and abandons the
    /// remainder.
    #[error("builder failed producing point {index}: {source}")]
    BuilderFailed { index: usize, source: Box<RfError> },
}
