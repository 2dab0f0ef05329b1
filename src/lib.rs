// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Steady-state, linear, frequency-domain analysis of cascaded two-port RF
//! networks.
//!
//! Given a signal path assembled from lumped elements, ideal transformers,
//! transmission lines and stubs, this crate computes terminal behaviour
//! (input/output impedance, S/Z/Y parameters, gain, VSWR, return and
//! insertion loss), drives frequency and component-value sweeps over a
//! caller-supplied network-builder, runs Monte-Carlo tolerance analysis, and
//! converts sweep results into reflection-coefficient point streams for a
//! Smith-chart renderer.
//!
//! The dependency order, leaves first, mirrors the module list below:
//! [`complex`] underlies [`twoport`] and [`params`], which underlie
//! [`components`]; [`sweep`] and [`montecarlo`] drive a caller's
//! [`components`]-built network over frequency, component value, or
//! randomized tolerance; [`smithchart`] turns any of those into point
//! streams. None of this renders anything — that's a host's job.

pub mod complex;
pub(crate) mod constants;
pub mod error;
pub(crate) mod validation;

pub mod components;
pub mod montecarlo;
pub mod params;
pub mod smithchart;
pub mod sweep;
pub mod twoport;

pub use error::{Result, RfError};
